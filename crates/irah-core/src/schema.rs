//! Canonical evaluation record schema.
//!
//! Every store and export uses exactly these column names, in this order.
//! Names are compared after trimming and lowercasing; there are no aliases.

use crate::error::CoreError;

/// Column names of an evaluation record.
pub mod field {
    pub const CASE_ID: &str = "case_id";
    pub const TIMESTAMP: &str = "timestamp";
    pub const FUGULIN: &str = "fugulin";
    pub const ASG: &str = "asg";
    pub const MRC: &str = "mrc";
    pub const TRIAGEM: &str = "triagem";
    pub const CHARLSON: &str = "charlson";
    pub const INDEX: &str = "index";
    pub const TIER: &str = "tier";
}

/// Columns in record order.
pub const COLUMNS: [&str; 9] = [
    field::CASE_ID,
    field::TIMESTAMP,
    field::FUGULIN,
    field::ASG,
    field::MRC,
    field::TRIAGEM,
    field::CHARLSON,
    field::INDEX,
    field::TIER,
];

fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Check that an unordered set of keys (e.g. a JSON object) covers [`COLUMNS`]
/// with nothing extra.
pub fn validate_columns<'a, I>(keys: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut found: Vec<String> = keys.into_iter().map(normalize_column).collect();
    found.sort();
    found.dedup();

    if let Some(extra) = found.iter().find(|k| !COLUMNS.contains(&k.as_str())) {
        return Err(CoreError::InvalidRecord(format!("unexpected column '{extra}'")));
    }
    if let Some(missing) = COLUMNS.iter().find(|c| !found.iter().any(|k| k == *c)) {
        return Err(CoreError::MissingRequiredField(missing.to_string()));
    }
    Ok(())
}
