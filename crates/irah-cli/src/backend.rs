use irah_core::models::record::EvaluationRecord;
use irah_storage::client::build_client;
use irah_storage::error::StorageError;
use irah_storage::local::LocalRecordStore;
use irah_storage::memory::MemoryRecordStore;
use irah_storage::s3::S3RecordStore;
use irah_storage::store::RecordStore;

use crate::config::StoreConfig;

/// The record store selected by configuration.
pub enum Backend {
    Local(LocalRecordStore),
    S3(S3RecordStore),
    Memory(MemoryRecordStore),
}

impl Backend {
    pub async fn from_config(config: &StoreConfig) -> Self {
        match config {
            StoreConfig::Local { path } => Backend::Local(LocalRecordStore::new(path.clone())),
            StoreConfig::S3 {
                bucket,
                region,
                key,
                profile,
                max_attempts,
            } => {
                let client = build_client(region, profile.as_deref()).await;
                Backend::S3(
                    S3RecordStore::new(client, bucket.clone(), key.clone())
                        .with_max_attempts(*max_attempts),
                )
            }
            StoreConfig::Memory => Backend::Memory(MemoryRecordStore::new()),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Backend::Local(_) => "local",
            Backend::S3(_) => "s3",
            Backend::Memory(_) => "memory",
        }
    }
}

#[async_trait::async_trait]
impl RecordStore for Backend {
    async fn append(&self, record: &EvaluationRecord) -> Result<(), StorageError> {
        match self {
            Backend::Local(store) => store.append(record).await,
            Backend::S3(store) => store.append(record).await,
            Backend::Memory(store) => store.append(record).await,
        }
    }

    async fn load_all(&self) -> Result<Vec<EvaluationRecord>, StorageError> {
        match self {
            Backend::Local(store) => store.load_all().await,
            Backend::S3(store) => store.load_all().await,
            Backend::Memory(store) => store.load_all().await,
        }
    }
}
