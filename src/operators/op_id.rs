use std::fmt;

/// Numeric identity of the built-in aggregate operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum OpId {
    Sum = 1,
    Count = 2,
    Castor = 3,
}

impl OpId {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpId::Sum => write!(f, "SUM_OP"),
            OpId::Count => write!(f, "COUNT_OP"),
            OpId::Castor => write!(f, "CASTOR_OP"),
        }
    }
}
