use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("precondition failed for key: {key}")]
    PreconditionFailed { key: String },

    #[error("gave up appending to {key} after {attempts} conflicting writes")]
    Conflict { key: String, attempts: u32 },

    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("record rejected: {0}")]
    Rejected(#[from] irah_core::error::CoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),
}
