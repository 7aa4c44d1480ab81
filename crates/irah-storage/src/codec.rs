//! JSON-lines encoding of the evaluation history.
//!
//! One record per line, keyed by the canonical column names. Reading a line
//! checks the key set against the schema before deserializing, so a drifted
//! column name fails loudly instead of being skipped.

use irah_core::models::record::EvaluationRecord;
use irah_core::schema;

use crate::error::StorageError;

/// Encode one record as a newline-terminated JSON line.
pub fn encode_record(record: &EvaluationRecord) -> Result<String, StorageError> {
    record.validate()?;
    let mut line = serde_json::to_string(record)?;
    line.push('\n');
    Ok(line)
}

/// Decode a JSON-lines document. Blank lines are skipped; line numbers in
/// errors are 1-based.
pub fn decode_records(text: &str) -> Result<Vec<EvaluationRecord>, StorageError> {
    let mut records = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        if raw.trim().is_empty() {
            continue;
        }
        records.push(decode_line(raw).map_err(|reason| StorageError::InvalidRecord {
            line,
            reason,
        })?);
    }
    Ok(records)
}

/// Decode a raw JSON-lines body. Invalid UTF-8 is rejected with the line it
/// occurs on; bytes are never replaced.
pub fn decode_bytes(bytes: &[u8]) -> Result<Vec<EvaluationRecord>, StorageError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        StorageError::InvalidRecord {
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
            reason: format!("invalid UTF-8: {e}"),
        }
    })?;
    decode_records(text)
}

fn decode_line(raw: &str) -> Result<EvaluationRecord, String> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    let object = value
        .as_object()
        .ok_or_else(|| "expected a JSON object".to_string())?;

    schema::validate_columns(object.keys().map(String::as_str)).map_err(|e| e.to_string())?;

    let record: EvaluationRecord = serde_json::from_value(value).map_err(|e| e.to_string())?;
    record.validate().map_err(|e| e.to_string())?;
    Ok(record)
}
