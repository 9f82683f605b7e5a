use formcoach_core::config::validate_reference;
use formcoach_core::{Aggregation, ConfigError, JointAngles, TrainerConfig};

#[test]
fn defaults_are_valid() {
    let cfg = TrainerConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.confidence_threshold, 0.3);
    assert_eq!(cfg.good_breakpoint, 80);
    assert_eq!(cfg.warn_breakpoint, 60);
    assert_eq!(cfg.aggregation, Aggregation::Mean);
    assert_eq!(cfg.rep_low_deg, 110.0);
    assert_eq!(cfg.rep_high_deg, 160.0);
    assert_eq!(cfg.flush_interval_ms, 500);
}

#[test]
fn rep_thresholds_low_must_be_below_high() {
    let cfg = TrainerConfig { rep_low_deg: 160.0, rep_high_deg: 110.0, ..Default::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::RepThresholds { .. })));

    let cfg = TrainerConfig { rep_low_deg: 110.0, rep_high_deg: 110.0, ..Default::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::RepThresholds { .. })));
}

#[test]
fn confidence_threshold_must_be_a_fraction() {
    for bad in [0.0, 1.0, -0.2, 1.7, f64::NAN] {
        let cfg = TrainerConfig { confidence_threshold: bad, ..Default::default() };
        assert!(
            matches!(cfg.validate(), Err(ConfigError::ConfidenceThreshold(_))),
            "accepted {bad}"
        );
    }
}

#[test]
fn breakpoints_must_be_ordered_and_in_range() {
    let cfg = TrainerConfig { warn_breakpoint: 90, good_breakpoint: 80, ..Default::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::Breakpoints { .. })));

    let cfg = TrainerConfig { warn_breakpoint: 90, good_breakpoint: 110, ..Default::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::BreakpointRange { .. })));
}

#[test]
fn flush_interval_must_be_positive() {
    let cfg = TrainerConfig { flush_interval_ms: 0, ..Default::default() };
    assert_eq!(cfg.validate(), Err(ConfigError::FlushInterval));
}

#[test]
fn legacy_min_85_variant_is_expressible() {
    let cfg = TrainerConfig {
        aggregation: Aggregation::Min,
        good_breakpoint: 85,
        warn_breakpoint: 85,
        ..Default::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn reference_angles_must_be_in_half_open_range() {
    validate_reference(&JointAngles::new(90.0, 90.0, 180.0, 180.0)).unwrap();

    let zero_knee = JointAngles::new(90.0, 0.0, 180.0, 180.0);
    assert!(matches!(
        validate_reference(&zero_knee),
        Err(ConfigError::ReferenceAngle { joint: "knee", .. })
    ));

    let overshoot = JointAngles::new(90.0, 90.0, 181.0, 180.0);
    assert!(matches!(
        validate_reference(&overshoot),
        Err(ConfigError::ReferenceAngle { joint: "elbow", .. })
    ));
}

#[test]
fn partial_config_json_fills_defaults() {
    let cfg: TrainerConfig =
        serde_json::from_str(r#"{"aggregation":"min","good_breakpoint":85}"#).unwrap();
    assert_eq!(cfg.aggregation, Aggregation::Min);
    assert_eq!(cfg.good_breakpoint, 85);
    // Resten faller tilbake til defaults.
    assert_eq!(cfg.confidence_threshold, 0.3);
    assert_eq!(cfg.flush_interval_ms, 500);
}
