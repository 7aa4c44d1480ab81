use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    #[error("unknown ASG category: '{0}'")]
    UnknownAsgCategory(String),

    #[error("unknown risk tier: '{0}'")]
    UnknownRiskTier(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
