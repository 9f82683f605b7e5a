use crate::angles::joint_visible;
use crate::config::TrainerConfig;
use crate::types::{
    AccuracySet, FeedbackItem, Joint, JointAngles, Keypoint, PostureStatus, Severity,
};

/// Status fra overall accuracy med konfigurerbare breakpoints (default 80/60).
pub fn posture_status(overall: u8, config: &TrainerConfig) -> PostureStatus {
    if overall >= config.good_breakpoint {
        PostureStatus::Correct
    } else if overall >= config.warn_breakpoint {
        PostureStatus::Adjust
    } else {
        PostureStatus::Incorrect
    }
}

fn summary_item(status: PostureStatus) -> FeedbackItem {
    match status {
        PostureStatus::Correct => {
            FeedbackItem::new("CORRECT — keep up the good form", Severity::Good)
        }
        PostureStatus::Adjust => {
            FeedbackItem::new("ADJUST — your form needs small corrections", Severity::Warning)
        }
        PostureStatus::Incorrect => {
            FeedbackItem::new("INCORRECT — follow the corrections below", Severity::Error)
        }
    }
}

/// Én item per ledd i fast prioriteringsrekkefølge (Hip, Knee, Elbow,
/// Shoulder), med en ledende oppsummering. Regenereres i sin helhet hver
/// frame — ingen inkrementell diffing.
///
/// Tomt/pose-løst keypoint-sett gir én overstyrende Error-item i stedet for
/// per-ledd-støy.
pub fn generate(
    angles: &JointAngles,
    reference: &JointAngles,
    accuracy: &AccuracySet,
    keypoints: &[Keypoint],
    overall: u8,
    config: &TrainerConfig,
) -> Vec<FeedbackItem> {
    if !crate::angles::pose_present(keypoints, config.confidence_threshold) {
        return vec![FeedbackItem::new(
            "No person detected. Position yourself in front of the camera.",
            Severity::Error,
        )];
    }

    let mut items = Vec::with_capacity(Joint::ALL.len() + 1);
    items.push(summary_item(posture_status(overall, config)));

    for joint in Joint::ALL {
        items.push(joint_item(joint, angles, reference, accuracy, keypoints, config));
    }

    items
}

fn joint_item(
    joint: Joint,
    angles: &JointAngles,
    reference: &JointAngles,
    accuracy: &AccuracySet,
    keypoints: &[Keypoint],
    config: &TrainerConfig,
) -> FeedbackItem {
    let label = joint.label();

    if !joint_visible(keypoints, joint, config.confidence_threshold) {
        return FeedbackItem::new(
            format!("No {label} detected. Adjust your position so your {label} is visible."),
            Severity::Error,
        );
    }

    let pct = accuracy.get(joint);
    let diff = angles.get(joint) - reference.get(joint);

    if pct >= config.good_breakpoint {
        FeedbackItem::new(format!("{label} angle within optimal range"), Severity::Good)
    } else if pct >= config.warn_breakpoint {
        let hint = if diff > 0.0 {
            format!("Bend your {label} a little further")
        } else {
            format!("Straighten your {label} slightly")
        };
        FeedbackItem::new(hint, Severity::Warning)
    } else {
        let hint = if diff > 0.0 {
            format!("Your {label} is far too straight — bend it much further")
        } else {
            format!("Your {label} is bent far too much — straighten it out")
        };
        FeedbackItem::new(hint, Severity::Error)
    }
}

/// Del en feedback-sekvens i "good form" og "needs improvement" for visning.
/// Kjernen produserer fortsatt én rangert sekvens; dette er en ren hjelper.
pub fn partition(items: &[FeedbackItem]) -> (Vec<FeedbackItem>, Vec<FeedbackItem>) {
    let good = items
        .iter()
        .filter(|i| i.severity == Severity::Good)
        .cloned()
        .collect();
    let needs_work = items
        .iter()
        .filter(|i| i.severity != Severity::Good)
        .cloned()
        .collect();
    (good, needs_work)
}
