use aws_sdk_s3::Client;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

/// Result of a GET operation, including the body and ETag.
pub struct GetObjectOutput {
    pub body: Vec<u8>,
    pub etag: Option<String>,
}

/// Get an object from S3.
pub async fn get_object(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<GetObjectOutput, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let etag = resp.e_tag().map(|s| s.to_string());
    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes()
        .to_vec();

    Ok(GetObjectOutput { body, etag })
}

// S3 answers 412 PreconditionFailed on an ETag mismatch and 409
// ConditionalRequestConflict when two conditional writes race.
fn is_precondition_failure(err: &impl ProvideErrorMetadata, message: &str) -> bool {
    matches!(
        err.code(),
        Some("PreconditionFailed" | "ConditionalRequestConflict")
    ) || message.contains("PreconditionFailed")
}

/// Put an object to S3 with an If-Match precondition (ETag optimistic locking).
/// Returns the new ETag on success, or `StorageError::PreconditionFailed` if the
/// ETag doesn't match.
pub async fn put_object_if_match(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    content_type: &str,
    expected_etag: &str,
) -> Result<String, StorageError> {
    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body))
        .content_type(content_type)
        .if_match(expected_etag)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if is_precondition_failure(&err, &err.to_string()) {
                StorageError::PreconditionFailed {
                    key: key.to_string(),
                }
            } else {
                StorageError::PutObject(err.to_string())
            }
        })?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

/// Put an object to S3 only if no object exists at `key` (If-None-Match: *).
/// Returns `StorageError::PreconditionFailed` if another writer created it first.
pub async fn put_object_if_absent(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    content_type: &str,
) -> Result<String, StorageError> {
    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body))
        .content_type(content_type)
        .if_none_match("*")
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if is_precondition_failure(&err, &err.to_string()) {
                StorageError::PreconditionFailed {
                    key: key.to_string(),
                }
            } else {
                StorageError::PutObject(err.to_string())
            }
        })?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}
