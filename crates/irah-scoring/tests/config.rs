use irah_scoring::config::{ScoringConfig, CURRENT_VERSION};
use irah_scoring::error::ConfigError;

#[test]
fn default_config_is_valid() {
    let config = ScoringConfig::default();
    config.validate().unwrap();
    assert_eq!(config.version, CURRENT_VERSION);
    assert_eq!(config.fugulin.minimal_max, 17);
    assert_eq!(config.tiers.low_max, 0.30);
    assert_eq!(config.tiers.high_min, 0.60);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = ScoringConfig::from_json(r#"{ "mrc": { "weakness_max": 40 } }"#).unwrap();
    assert_eq!(config.mrc.weakness_max, 40);
    assert_eq!(config.triagem.high_risk_min, 10);
    assert_eq!(config.version, CURRENT_VERSION);
}

#[test]
fn default_config_survives_json() {
    let json = serde_json::to_string(&ScoringConfig::default()).unwrap();
    assert_eq!(ScoringConfig::from_json(&json).unwrap(), ScoringConfig::default());
}

#[test]
fn newer_version_is_rejected() {
    let err = ScoringConfig::from_json(r#"{ "version": 99 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedVersion { found: 99, .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = ScoringConfig::from_json(r#"{ "divisor": 5 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unordered_fugulin_bands_are_rejected() {
    let json = r#"{ "fugulin": {
        "minimal_max": 25, "intermediate_max": 22, "intermediate_weight": 0.14,
        "high_dependency_max": 34, "high_dependency_weight": 0.43 } }"#;
    assert!(matches!(ScoringConfig::from_json(json), Err(ConfigError::Invalid(_))));
}

#[test]
fn weights_outside_unit_interval_are_rejected() {
    let mut config = ScoringConfig::default();
    config.asg.severe = 1.5;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = ScoringConfig::default();
    config.charlson.partial_weight = -0.1;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn overlapping_tiers_are_rejected() {
    let mut config = ScoringConfig::default();
    config.tiers.low_max = 0.7;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn zero_charlson_saturation_is_rejected() {
    let mut config = ScoringConfig::default();
    config.charlson.saturation_min = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn thresholds_finer_than_hundredths_are_rejected() {
    let err = ScoringConfig::from_json(r#"{ "tiers": { "low_max": 0.305, "high_min": 0.6 } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let config =
        ScoringConfig::from_json(r#"{ "tiers": { "low_max": 0.35, "high_min": 0.65 } }"#).unwrap();
    assert_eq!(config.tiers.low_max, 0.35);
}
