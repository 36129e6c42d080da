use thiserror::Error;

/// Errors owned by the analytics service and its configuration.
#[derive(Debug, Error)]
pub enum CastorError {
    #[error("algorithm type not found: {0}")]
    AlgoTypeNotFound(String),

    #[error("algorithm {algo} not found for algorithm type {algo_type}")]
    AlgoNotFound { algo: String, algo_type: String },

    #[error("configuration {conf} not found for algorithm type {algo_type}")]
    ConfNotFound { conf: String, algo_type: String },

    #[error("invalid castor configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read castor configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse castor configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl CastorError {
    /// True for the not-found family raised by the algorithm/configuration
    /// existence check.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CastorError::AlgoTypeNotFound(_) | CastorError::AlgoNotFound { .. } | CastorError::ConfNotFound { .. }
        )
    }
}
