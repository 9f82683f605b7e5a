use crate::types::{BodyPart, Joint, JointAngles, Keypoint};

/// Segmentvektorer kortere enn dette regnes som degenerert geometri.
const MIN_SEGMENT_LEN: f64 = 1e-6;

/// De to kandidat-tripplene (venstre/høyre) per ledd, anker i midten.
fn joint_triples(joint: Joint) -> [[BodyPart; 3]; 2] {
    use BodyPart::*;
    match joint {
        Joint::Hip => [[LeftShoulder, LeftHip, LeftKnee], [RightShoulder, RightHip, RightKnee]],
        Joint::Knee => [[LeftHip, LeftKnee, LeftAnkle], [RightHip, RightKnee, RightAnkle]],
        Joint::Elbow => [[LeftShoulder, LeftElbow, LeftWrist], [RightShoulder, RightElbow, RightWrist]],
        Joint::Shoulder => [[LeftElbow, LeftShoulder, LeftHip], [RightElbow, RightShoulder, RightHip]],
    }
}

fn find(keypoints: &[Keypoint], part: BodyPart, threshold: f64) -> Option<&Keypoint> {
    keypoints.iter().find(|k| k.part == part && k.score >= threshold)
}

/// Interior angle at `b` between the segments b→a and b→c, in degrees,
/// clamped to [0, 180]. `None` on near-zero segment length.
fn interior_angle(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Option<f64> {
    let v1 = (a.0 - b.0, a.1 - b.1);
    let v2 = (c.0 - b.0, c.1 - b.1);

    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();
    if mag1 < MIN_SEGMENT_LEN || mag2 < MIN_SEGMENT_LEN {
        return None;
    }

    let cos = ((v1.0 * v2.0 + v1.1 * v2.1) / (mag1 * mag2)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees().clamp(0.0, 180.0))
}

/// Vinkel + snittscore for ett kandidat-trippel, hvis alle tre keypoints
/// passerer terskelen og geometrien ikke er degenerert.
fn side_angle(keypoints: &[Keypoint], triple: [BodyPart; 3], threshold: f64) -> Option<(f64, f64)> {
    let a = find(keypoints, triple[0], threshold)?;
    let b = find(keypoints, triple[1], threshold)?;
    let c = find(keypoints, triple[2], threshold)?;
    let angle = interior_angle((a.x, a.y), (b.x, b.y), (c.x, c.y))?;
    Some((angle, (a.score + b.score + c.score) / 3.0))
}

/// True when at least one side of `joint` has all three supporting keypoints
/// above the confidence threshold.
pub fn joint_visible(keypoints: &[Keypoint], joint: Joint, threshold: f64) -> bool {
    joint_triples(joint)
        .iter()
        .any(|t| t.iter().all(|p| find(keypoints, *p, threshold).is_some()))
}

/// True when the frame contains any confident keypoint at all.
pub fn pose_present(keypoints: &[Keypoint], threshold: f64) -> bool {
    keypoints.iter().any(|k| k.score >= threshold)
}

/// Extract the tracked joint angles for one frame.
///
/// Per joint the better-scoring visible side wins. Missing keypoints or
/// degenerate segments fall back to `previous` unchanged, so the output is
/// always total and single-frame detector noise never produces angle jumps.
pub fn extract_angles(
    keypoints: &[Keypoint],
    previous: &JointAngles,
    threshold: f64,
) -> JointAngles {
    let mut out = *previous;

    for joint in Joint::ALL {
        let [left, right] = joint_triples(joint);
        let best = match (
            side_angle(keypoints, left, threshold),
            side_angle(keypoints, right, threshold),
        ) {
            (Some(l), Some(r)) => Some(if l.1 >= r.1 { l.0 } else { r.0 }),
            (Some(l), None) => Some(l.0),
            (None, Some(r)) => Some(r.0),
            (None, None) => None,
        };

        match best {
            Some(deg) => out.set(joint, deg),
            None => {
                log::debug!("{}: no usable keypoints, carrying forward {:.1}°",
                    joint.label(), previous.get(joint));
            }
        }
    }

    out
}
