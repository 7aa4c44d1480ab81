use irah_core::error::CoreError;
use irah_core::models::observation::{AsgCategory, ClinicalObservation, Scale};
use irah_core::models::record::EvaluationRecord;
use irah_core::models::score::{RiskTier, ScoreResult};

fn observation() -> ClinicalObservation {
    ClinicalObservation {
        fugulin: 20,
        asg: AsgCategory::ModeratelyMalnourished,
        mrc: 40,
        triagem: 4,
        charlson: 3,
    }
}

fn timestamp() -> jiff::Timestamp {
    "2025-03-14T09:30:00Z".parse().unwrap()
}

#[test]
fn asg_parses_form_labels() {
    assert_eq!(AsgCategory::from_label("").unwrap(), AsgCategory::Unspecified);
    assert_eq!(
        AsgCategory::from_label("Bem nutrido (ASG A)").unwrap(),
        AsgCategory::WellNourished
    );
    assert_eq!(
        AsgCategory::from_label("Moderadamente desnutrido (ASG B)").unwrap(),
        AsgCategory::ModeratelyMalnourished
    );
    assert_eq!(
        AsgCategory::from_label("Gravemente desnutrido (ASG C)").unwrap(),
        AsgCategory::SeverelyMalnourished
    );
}

#[test]
fn asg_parses_letters_and_ids() {
    assert_eq!("c".parse::<AsgCategory>().unwrap(), AsgCategory::SeverelyMalnourished);
    assert_eq!(" B ".parse::<AsgCategory>().unwrap(), AsgCategory::ModeratelyMalnourished);
    assert_eq!(
        "well_nourished".parse::<AsgCategory>().unwrap(),
        AsgCategory::WellNourished
    );
}

#[test]
fn asg_form_labels_round_trip() {
    for category in AsgCategory::ALL {
        assert_eq!(AsgCategory::from_label(category.form_label()).unwrap(), category);
    }
}

#[test]
fn unknown_asg_label_is_an_error() {
    let err = AsgCategory::from_label("ASG D").unwrap_err();
    assert!(matches!(err, CoreError::UnknownAsgCategory(label) if label == "ASG D"));
}

#[test]
fn risk_tiers_are_ordered() {
    assert!(RiskTier::Low < RiskTier::Moderate);
    assert!(RiskTier::Moderate < RiskTier::High);
    assert_eq!(RiskTier::High.to_string(), "High Risk");
}

#[test]
fn risk_tier_accepts_legacy_labels() {
    assert_eq!("Alto Risco".parse::<RiskTier>().unwrap(), RiskTier::High);
    assert_eq!("Risco Moderado".parse::<RiskTier>().unwrap(), RiskTier::Moderate);
    assert_eq!("low_risk".parse::<RiskTier>().unwrap(), RiskTier::Low);
    assert!("medium".parse::<RiskTier>().is_err());
}

#[test]
fn scale_domains_match_form_limits() {
    assert_eq!(Scale::Fugulin.domain().unwrap().max, 100);
    assert_eq!(Scale::Mrc.domain().unwrap().max, 60);
    assert_eq!(Scale::Triagem.domain().unwrap().max, 20);
    assert_eq!(Scale::Charlson.domain().unwrap().max, 50);
    assert!(Scale::Asg.domain().is_none());
    assert!(!Scale::Mrc.domain().unwrap().contains(-1));
    assert!(!Scale::Mrc.domain().unwrap().contains(61));
}

#[test]
fn record_carries_observation_and_result() {
    let result = ScoreResult {
        index: 0.37,
        tier: RiskTier::Moderate,
    };
    let record = EvaluationRecord::new("  ATD-001 ", timestamp(), &observation(), &result).unwrap();

    assert_eq!(record.case_id, "ATD-001");
    assert_eq!(record.observation(), observation());
    assert_eq!(record.result(), result);
    record.validate().unwrap();
}

#[test]
fn blank_case_id_is_refused() {
    let result = ScoreResult {
        index: 0.0,
        tier: RiskTier::Low,
    };
    let err = EvaluationRecord::new("   ", timestamp(), &observation(), &result).unwrap_err();
    assert!(matches!(err, CoreError::MissingRequiredField(f) if f == "case_id"));
}

#[test]
fn record_json_uses_canonical_names() {
    let result = ScoreResult {
        index: 0.37,
        tier: RiskTier::Moderate,
    };
    let record = EvaluationRecord::new("ATD-001", timestamp(), &observation(), &result).unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["asg"], "moderately_malnourished");
    assert_eq!(json["tier"], "moderate");
    assert_eq!(json["timestamp"], "2025-03-14T09:30:00Z");
}

#[test]
fn record_rejects_unknown_fields() {
    let json = r#"{"case_id":"x","timestamp":"2025-03-14T09:30:00Z","fugulin":0,"asg":"unspecified",
        "mrc":60,"triagem":0,"charlson":0,"index":0.0,"tier":"low","irah":0.0}"#;
    assert!(serde_json::from_str::<EvaluationRecord>(json).is_err());
}

#[test]
fn validate_flags_out_of_domain_values() {
    let result = ScoreResult {
        index: 0.2,
        tier: RiskTier::Low,
    };
    let mut record = EvaluationRecord::new("ATD-2", timestamp(), &observation(), &result).unwrap();
    record.mrc = 61;
    assert!(matches!(record.validate(), Err(CoreError::InvalidRecord(_))));

    record.mrc = 40;
    record.index = 1.2;
    assert!(matches!(record.validate(), Err(CoreError::InvalidRecord(_))));
}
