use crate::config::Aggregation;
use crate::types::{AccuracySet, Joint, JointAngles};

/// Relativ-feil-score for ett ledd, 0–100.
///
/// `100 - |angle - ref| / ref * 100`, klampet og avrundet til nærmeste
/// heltall. Metrikken straffer avvik fra små referansevinkler hardere enn
/// fra store (stram toleranse nær strak stilling).
pub fn score_joint(angle_deg: f64, reference_deg: f64) -> u8 {
    let pct = 100.0 - ((angle_deg - reference_deg).abs() / reference_deg) * 100.0;
    pct.clamp(0.0, 100.0).round() as u8
}

/// Score alle sporede ledd mot referansen. Referansen er validert til
/// (0, 180] ved konstruksjon, så divisjonen er alltid definert.
pub fn score(angles: &JointAngles, reference: &JointAngles) -> AccuracySet {
    let mut out = AccuracySet::default();
    for joint in Joint::ALL {
        out.set(joint, score_joint(angles.get(joint), reference.get(joint)));
    }
    out
}

/// Overall accuracy under valgt aggregeringspolicy.
///
/// Mean bruker trunkerende heltallssnitt (sum/antall), min tar det dårligste
/// leddet — ett dårlig ledd setter taket for hele scoren.
pub fn overall(accuracy: &AccuracySet, policy: Aggregation) -> u8 {
    match policy {
        Aggregation::Mean => {
            let sum: u32 = Joint::ALL.iter().map(|j| accuracy.get(*j) as u32).sum();
            (sum / Joint::ALL.len() as u32) as u8
        }
        Aggregation::Min => Joint::ALL
            .iter()
            .map(|j| accuracy.get(*j))
            .min()
            .unwrap_or(0),
    }
}
