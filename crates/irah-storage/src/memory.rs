use tokio::sync::Mutex;

use irah_core::models::record::EvaluationRecord;

use crate::error::StorageError;
use crate::store::RecordStore;

/// In-memory evaluation history. Nothing survives the process.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: Mutex<Vec<EvaluationRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RecordStore for MemoryRecordStore {
    async fn append(&self, record: &EvaluationRecord) -> Result<(), StorageError> {
        record.validate()?;
        self.records.lock().await.push(record.clone());
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<EvaluationRecord>, StorageError> {
        Ok(self.records.lock().await.clone())
    }
}
