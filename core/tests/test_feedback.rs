use formcoach_core::accuracy;
use formcoach_core::feedback::{generate, partition, posture_status};
use formcoach_core::types::BodyPart::*;
use formcoach_core::{
    BodyPart, JointAngles, Keypoint, PostureStatus, Severity, TrainerConfig,
};

fn kp(part: BodyPart, x: f64, y: f64, score: f64) -> Keypoint {
    Keypoint { part, x, y, score }
}

/// Keypoints som gjør alle fire ledd synlige; vinklene i testene settes
/// direkte, så geometrien her trenger bare å være ikke-degenerert.
fn visible_skeleton() -> Vec<Keypoint> {
    vec![
        kp(LeftShoulder, 0.0, 0.0, 0.9),
        kp(LeftElbow, 0.0, 1.0, 0.9),
        kp(LeftWrist, 0.0, 2.0, 0.9),
        kp(LeftHip, 1.0, 0.0, 0.9),
        kp(LeftKnee, 1.0, 1.0, 0.9),
        kp(LeftAnkle, 1.0, 2.0, 0.9),
    ]
}

#[test]
fn status_breakpoints() {
    let cfg = TrainerConfig::default();
    assert_eq!(posture_status(96, &cfg), PostureStatus::Correct);
    assert_eq!(posture_status(80, &cfg), PostureStatus::Correct);
    assert_eq!(posture_status(79, &cfg), PostureStatus::Adjust);
    assert_eq!(posture_status(60, &cfg), PostureStatus::Adjust);
    assert_eq!(posture_status(59, &cfg), PostureStatus::Incorrect);
}

#[test]
fn legacy_two_tier_config_has_no_adjust_band() {
    let cfg = TrainerConfig { good_breakpoint: 85, warn_breakpoint: 85, ..Default::default() };
    cfg.validate().unwrap();
    assert_eq!(posture_status(85, &cfg), PostureStatus::Correct);
    assert_eq!(posture_status(84, &cfg), PostureStatus::Incorrect);
}

#[test]
fn good_form_yields_summary_plus_four_good_items() {
    let cfg = TrainerConfig::default();
    let reference = JointAngles::new(90.0, 90.0, 180.0, 180.0);
    let observed = JointAngles::new(95.0, 85.0, 178.0, 176.0);
    let acc = accuracy::score(&observed, &reference);
    let overall = accuracy::overall(&acc, cfg.aggregation);

    let items = generate(&observed, &reference, &acc, &visible_skeleton(), overall, &cfg);

    assert_eq!(items.len(), 5);
    assert_eq!(items[0].severity, Severity::Good);
    assert!(items[0].text.contains("CORRECT"));
    assert!(items[1..].iter().all(|i| i.severity == Severity::Good));
}

#[test]
fn missing_knee_produces_error_naming_the_knee() {
    let cfg = TrainerConfig::default();
    let mut kps = visible_skeleton();
    for k in kps.iter_mut() {
        if k.part == LeftKnee {
            k.score = 0.1;
        }
    }
    let reference = JointAngles::new(90.0, 90.0, 180.0, 180.0);
    let observed = JointAngles::new(90.0, 90.0, 180.0, 180.0);
    let acc = accuracy::score(&observed, &reference);

    let items = generate(&observed, &reference, &acc, &kps, 100, &cfg);
    let knee_item = items
        .iter()
        .find(|i| i.text.contains("knee"))
        .expect("knee item present");
    assert_eq!(knee_item.severity, Severity::Error);
    assert!(knee_item.text.contains("No knee detected"));
}

#[test]
fn no_person_gives_single_overriding_error() {
    let cfg = TrainerConfig::default();
    let reference = JointAngles::new(90.0, 90.0, 180.0, 180.0);
    let stale = JointAngles::default();
    let acc = accuracy::score(&stale, &reference);

    let items = generate(&stale, &reference, &acc, &[], 50, &cfg);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].severity, Severity::Error);
    assert!(items[0].text.contains("No person detected"));
}

#[test]
fn warning_direction_follows_sign_of_deviation() {
    let cfg = TrainerConfig::default();
    let reference = JointAngles::new(120.0, 120.0, 120.0, 120.0);
    // Hofte for bøyd (85 < 120), kne for strak (155 > 120); begge i
    // warning-båndet (accuracy ~71).
    let observed = JointAngles::new(85.0, 155.0, 120.0, 120.0);
    let acc = accuracy::score(&observed, &reference);
    let overall = accuracy::overall(&acc, cfg.aggregation);

    let items = generate(&observed, &reference, &acc, &visible_skeleton(), overall, &cfg);

    let hip = items.iter().find(|i| i.text.contains("hip")).unwrap();
    assert_eq!(hip.severity, Severity::Warning);
    assert!(hip.text.contains("Straighten"), "{}", hip.text);

    let knee = items.iter().find(|i| i.text.contains("knee")).unwrap();
    assert_eq!(knee.severity, Severity::Warning);
    assert!(knee.text.contains("Bend"), "{}", knee.text);
}

#[test]
fn partition_splits_by_severity_keeping_order() {
    let cfg = TrainerConfig::default();
    let reference = JointAngles::new(120.0, 120.0, 120.0, 120.0);
    let observed = JointAngles::new(120.0, 155.0, 120.0, 10.0);
    let acc = accuracy::score(&observed, &reference);
    let overall = accuracy::overall(&acc, cfg.aggregation);

    let items = generate(&observed, &reference, &acc, &visible_skeleton(), overall, &cfg);
    let (good, needs_work) = partition(&items);

    assert!(good.iter().all(|i| i.severity == Severity::Good));
    assert!(needs_work.iter().all(|i| i.severity != Severity::Good));
    assert_eq!(good.len() + needs_work.len(), items.len());
    assert!(!needs_work.is_empty());
}
