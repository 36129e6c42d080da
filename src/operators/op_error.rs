use thiserror::Error;

use crate::{castor::CastorError, schema::DataType};

/// Why an aggregate call was rejected while planning.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("invalid number of arguments for {op}, expected {expected}, got {got}")]
    ArityMismatch { op: String, expected: usize, got: usize },

    #[error("data type {ty} not supported by {op}")]
    TypeIncompatible { op: String, ty: DataType },

    #[error("type assertion failed: {op} expects a string literal as {arg}")]
    TypeAssertionFailed { op: String, arg: &'static str },

    #[error("algorithm type not found: {0}")]
    AlgoTypeNotFound(String),

    #[error("castor service not enabled")]
    ServiceNotEnabled,

    #[error("castor service not alive")]
    ServiceNotAlive,

    /// Raised by the analytics service itself and passed on untouched.
    #[error(transparent)]
    Castor(#[from] CastorError),

    #[error("aggregate function not found: {0}")]
    FunctionNotFound(String),

    #[error("routine error: {0}")]
    Routine(String),
}
