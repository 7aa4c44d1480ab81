use aws_sdk_s3::Client;
use tracing::{debug, info, warn};

use irah_core::models::record::EvaluationRecord;

use crate::codec;
use crate::error::StorageError;
use crate::objects;
use crate::store::RecordStore;

const CONTENT_TYPE: &str = "application/x-ndjson";

/// Number of read-modify-write attempts before an append gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Evaluation history kept as a single JSON-lines object in S3.
///
/// Appends are read-modify-write cycles guarded by `If-Match` (or
/// `If-None-Match: *` for the first record), so concurrent writers never
/// lose each other's rows; a writer that loses the race re-reads and retries.
#[derive(Clone)]
pub struct S3RecordStore {
    client: Client,
    bucket: String,
    key: String,
    max_attempts: u32,
}

impl S3RecordStore {
    pub fn new(client: Client, bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            key: key.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    async fn read(&self) -> Result<(Vec<u8>, Option<String>), StorageError> {
        match objects::get_object(&self.client, &self.bucket, &self.key).await {
            Ok(output) => Ok((output.body, output.etag)),
            Err(StorageError::NotFound { .. }) => Ok((Vec::new(), None)),
            Err(e) => Err(e),
        }
    }
}

#[async_trait::async_trait]
impl RecordStore for S3RecordStore {
    async fn append(&self, record: &EvaluationRecord) -> Result<(), StorageError> {
        let line = codec::encode_record(record)?;

        for attempt in 1..=self.max_attempts {
            let (mut body, etag) = self.read().await?;
            if !body.is_empty() && !body.ends_with(b"\n") {
                body.push(b'\n');
            }
            body.extend_from_slice(line.as_bytes());

            let result = match etag.as_deref() {
                Some(etag) => {
                    objects::put_object_if_match(
                        &self.client,
                        &self.bucket,
                        &self.key,
                        body,
                        CONTENT_TYPE,
                        etag,
                    )
                    .await
                }
                None => {
                    objects::put_object_if_absent(
                        &self.client,
                        &self.bucket,
                        &self.key,
                        body,
                        CONTENT_TYPE,
                    )
                    .await
                }
            };

            match result {
                Ok(new_etag) => {
                    info!(
                        bucket = %self.bucket,
                        key = %self.key,
                        etag = %new_etag,
                        attempt,
                        "evaluation record appended"
                    );
                    return Ok(());
                }
                Err(StorageError::PreconditionFailed { .. }) => {
                    warn!(key = %self.key, attempt, "concurrent write detected, retrying append");
                }
                Err(e) => return Err(e),
            }
        }

        Err(StorageError::Conflict {
            key: self.key.clone(),
            attempts: self.max_attempts,
        })
    }

    async fn load_all(&self) -> Result<Vec<EvaluationRecord>, StorageError> {
        let (body, _etag) = self.read().await?;
        let records = codec::decode_bytes(&body)?;
        debug!(
            bucket = %self.bucket,
            key = %self.key,
            count = records.len(),
            "loaded evaluation history"
        );
        Ok(records)
    }
}
