use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};

use irah_core::models::record::EvaluationRecord;

use crate::codec;
use crate::error::StorageError;
use crate::store::RecordStore;

/// Evaluation history kept as a JSON-lines file on local disk.
///
/// Each append is a single `O_APPEND` write of one whole line, issued while
/// holding an in-process lock.
pub struct LocalRecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl RecordStore for LocalRecordStore {
    async fn append(&self, record: &EvaluationRecord) -> Result<(), StorageError> {
        let line = codec::encode_record(record)?;
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        info!(
            path = %self.path.display(),
            case_id = %record.case_id,
            "evaluation record appended"
        );
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<EvaluationRecord>, StorageError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no evaluation history yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        codec::decode_records(&text)
    }
}
