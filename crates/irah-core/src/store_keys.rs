//! Record store key/path conventions.
//!
//! Pure string functions with no storage dependency. These define where the
//! evaluation history lives in each store backend.

/// Object key of the evaluation history in an S3 bucket.
pub const RECORDS: &str = "irah/evaluations.jsonl";

/// File name of the evaluation history in a local data directory.
pub const RECORDS_FILE: &str = "evaluations.jsonl";

/// Default file name for a CSV export taken on `date`.
pub fn export_csv(date: jiff::civil::Date) -> String {
    format!("irah-export-{date}.csv")
}
