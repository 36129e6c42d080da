use crate::operators::{OpError, OpId};

/// Identity shared by every operator: name, id and arity.
///
/// Concrete operators embed one and hand it out through `Op::base`, which
/// is where the provided accessors and the arity checks of the trait read
/// from. The values never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseOp {
    name: String,
    id: OpId,
    arity: usize,
}

impl BaseOp {
    pub fn new(name: impl Into<String>, id: OpId, arity: usize) -> Self {
        Self { name: name.into(), id, arity }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> OpId {
        self.id
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Used for both argument types and call arguments, so the two entry
    /// points can never disagree on the expected count.
    pub fn check_arity(&self, got: usize) -> Result<(), OpError> {
        if got != self.arity {
            return Err(OpError::ArityMismatch {
                op: self.name.clone(),
                expected: self.arity,
                got,
            });
        }
        Ok(())
    }
}
