use irah_core::models::record::EvaluationRecord;

use crate::error::StorageError;

/// Append-only store of evaluation records.
///
/// Implementations own the serialization of concurrent appends; callers
/// never coordinate writes themselves.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Append one record. Records are validated before anything is written.
    async fn append(&self, record: &EvaluationRecord) -> Result<(), StorageError>;

    /// Load the full history, in insertion order.
    async fn load_all(&self) -> Result<Vec<EvaluationRecord>, StorageError>;
}
