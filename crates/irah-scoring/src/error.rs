use thiserror::Error;

use irah_core::models::observation::Scale;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("{scale} value {value} is outside [{min}, {max}]")]
    OutOfRangeInput {
        scale: Scale,
        value: i32,
        min: i32,
        max: i32,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid scoring config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("scoring config version {found} is newer than supported ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid scoring config: {0}")]
    Invalid(String),
}
