use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::Literal;

/// Scalar value kinds an aggregate argument or result can have.
///
/// `Unknown` doubles as the "not yet resolved" type and as the value
/// returned on every error path of type inference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Type not resolved, or inference failed
    #[default]
    Unknown,
    /// Boolean field or literal
    Boolean,
    /// String field or literal
    String,
    /// Integer number
    Integer,
    /// Floating-point number
    Float,
}

impl DataType {
    /// Classify a literal into its `DataType`. `NULL` has no type of its own
    /// and maps to `Unknown`.
    pub fn of_literal(literal: &Literal) -> DataType {
        match literal {
            Literal::String(_) => DataType::String,
            Literal::Int(_) => DataType::Integer,
            Literal::Float(_) => DataType::Float,
            Literal::Bool(_) => DataType::Boolean,
            Literal::Null => DataType::Unknown,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Float)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Unknown => write!(f, "unknown"),
            DataType::Boolean => write!(f, "boolean"),
            DataType::String => write!(f, "string"),
            DataType::Integer => write!(f, "integer"),
            DataType::Float => write!(f, "float"),
        }
    }
}
