use irah_core::models::observation::{AsgCategory, ClinicalObservation, Scale};
use irah_scoring::config::ScoringConfig;
use irah_scoring::error::ScoringError;
use irah_scoring::scales::charlson::Charlson;
use irah_scoring::scales::fugulin::Fugulin;
use irah_scoring::scales::mrc::Mrc;
use irah_scoring::scales::triagem::Triagem;
use irah_scoring::{NumericScale, normalize};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn fugulin_bands() {
    let config = ScoringConfig::default();
    let cases = [
        (0, 0.0),
        (12, 0.0),
        (16, 0.0),
        (17, 0.0),
        (18, 0.14),
        (22, 0.14),
        (23, 0.43),
        (34, 0.43),
        (35, 1.0),
        (100, 1.0),
    ];
    for (raw, expected) in cases {
        let got = Fugulin.normalize(raw, &config).unwrap();
        assert!(close(got, expected), "fugulin {raw}: expected {expected}, got {got}");
    }
}

#[test]
fn fugulin_seventeen_falls_in_lowest_band() {
    let config = ScoringConfig::default();
    assert_eq!(Fugulin.normalize(17, &config).unwrap(), 0.0);
}

#[test]
fn asg_weights() {
    let config = ScoringConfig::default();
    let cases = [
        (AsgCategory::Unspecified, 0.0),
        (AsgCategory::WellNourished, 0.0),
        (AsgCategory::ModeratelyMalnourished, 0.5),
        (AsgCategory::SeverelyMalnourished, 1.0),
    ];
    for (category, expected) in cases {
        assert_eq!(irah_scoring::scales::asg::normalize(category, &config), expected);
    }
}

#[test]
fn mrc_cutoff_is_inclusive_at_35() {
    let config = ScoringConfig::default();
    assert_eq!(Mrc.normalize(0, &config).unwrap(), 1.0);
    assert_eq!(Mrc.normalize(35, &config).unwrap(), 1.0);
    assert_eq!(Mrc.normalize(36, &config).unwrap(), 0.0);
    assert_eq!(Mrc.normalize(60, &config).unwrap(), 0.0);
}

#[test]
fn triagem_cutoff_is_inclusive_at_10() {
    let config = ScoringConfig::default();
    assert_eq!(Triagem.normalize(9, &config).unwrap(), 0.0);
    assert_eq!(Triagem.normalize(10, &config).unwrap(), 1.0);
    assert_eq!(Triagem.normalize(20, &config).unwrap(), 1.0);
}

#[test]
fn charlson_partial_and_saturated() {
    let config = ScoringConfig::default();
    assert_eq!(Charlson.normalize(0, &config).unwrap(), 0.0);
    assert!(close(Charlson.normalize(1, &config).unwrap(), 0.125));
    assert!(close(Charlson.normalize(3, &config).unwrap(), 0.375));
    assert!(close(Charlson.normalize(5, &config).unwrap(), 0.625));
    assert_eq!(Charlson.normalize(6, &config).unwrap(), 1.0);
    assert_eq!(Charlson.normalize(50, &config).unwrap(), 1.0);
}

#[test]
fn out_of_range_values_are_reported_not_clamped() {
    let config = ScoringConfig::default();

    let err = Mrc.normalize(-1, &config).unwrap_err();
    assert_eq!(
        err,
        ScoringError::OutOfRangeInput {
            scale: Scale::Mrc,
            value: -1,
            min: 0,
            max: 60,
        }
    );

    let err = Mrc.normalize(61, &config).unwrap_err();
    assert!(matches!(err, ScoringError::OutOfRangeInput { value: 61, .. }));

    assert!(Fugulin.normalize(101, &config).is_err());
    assert!(Triagem.normalize(21, &config).is_err());
    assert!(Charlson.normalize(51, &config).is_err());
}

#[test]
fn out_of_range_message_names_field_and_value() {
    let config = ScoringConfig::default();
    let err = Triagem.normalize(25, &config).unwrap_err();
    assert_eq!(err.to_string(), "triagem value 25 is outside [0, 20]");
}

#[test]
fn observation_reports_first_bad_field() {
    let config = ScoringConfig::default();
    let observation = ClinicalObservation {
        fugulin: 20,
        asg: AsgCategory::Unspecified,
        mrc: 70,
        triagem: 30,
        charlson: 0,
    };
    let err = normalize(&observation, &config).unwrap_err();
    assert!(matches!(err, ScoringError::OutOfRangeInput { scale: Scale::Mrc, .. }));
}

#[test]
fn recalibrated_config_moves_breakpoints() {
    let mut config = ScoringConfig::default();
    config.mrc.weakness_max = 48;
    config.charlson.partial_weight = 0.5;

    assert_eq!(Mrc.normalize(40, &config).unwrap(), 1.0);
    assert!(close(Charlson.normalize(3, &config).unwrap(), 0.25));
}
