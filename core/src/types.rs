use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The standard 17-point skeletal set (MoveNet/PoseNet order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl BodyPart {
    /// Detector output index → part, i den kanoniske MoveNet-rekkefølgen.
    pub fn from_index(i: usize) -> Option<BodyPart> {
        use BodyPart::*;
        const ORDER: [BodyPart; 17] = [
            Nose, LeftEye, RightEye, LeftEar, RightEar, LeftShoulder, RightShoulder, LeftElbow,
            RightElbow, LeftWrist, RightWrist, LeftHip, RightHip, LeftKnee, RightKnee, LeftAnkle,
            RightAnkle,
        ];
        ORDER.get(i).copied()
    }

    /// Tolerant navneoppslag: aksepterer "left_knee", "leftKnee" og "LeftKnee".
    pub fn parse(name: &str) -> Option<BodyPart> {
        use BodyPart::*;
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Some(match key.as_str() {
            "nose" => Nose,
            "lefteye" => LeftEye,
            "righteye" => RightEye,
            "leftear" => LeftEar,
            "rightear" => RightEar,
            "leftshoulder" => LeftShoulder,
            "rightshoulder" => RightShoulder,
            "leftelbow" => LeftElbow,
            "rightelbow" => RightElbow,
            "leftwrist" => LeftWrist,
            "rightwrist" => RightWrist,
            "lefthip" => LeftHip,
            "righthip" => RightHip,
            "leftknee" => LeftKnee,
            "rightknee" => RightKnee,
            "leftankle" => LeftAnkle,
            "rightankle" => RightAnkle,
            _ => return None,
        })
    }
}

/// One detected anatomical landmark, fresh per frame from the detector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Keypoint {
    pub part: BodyPart,
    pub x: f64,
    pub y: f64,
    /// Detector confidence, 0..=1.
    pub score: f64,
}

/// The tracked joints the pipeline scores. Venstre/høyre-valget gjøres i
/// vinkelekstraksjonen; her er leddet logisk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Joint {
    Hip,
    Knee,
    Elbow,
    Shoulder,
}

impl Joint {
    /// Fixed evaluation order used by scoring and feedback.
    pub const ALL: [Joint; 4] = [Joint::Hip, Joint::Knee, Joint::Elbow, Joint::Shoulder];

    /// Lowercase display name for feedback texts.
    pub fn label(self) -> &'static str {
        match self {
            Joint::Hip => "hip",
            Joint::Knee => "knee",
            Joint::Elbow => "elbow",
            Joint::Shoulder => "shoulder",
        }
    }
}

/// Per-joint angles in degrees, always fully populated (0..=180).
/// A never-seen joint holds the neutral 180°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JointAngles {
    pub hip: f64,
    pub knee: f64,
    pub elbow: f64,
    pub shoulder: f64,
}

impl Default for JointAngles {
    fn default() -> Self {
        Self { hip: 180.0, knee: 180.0, elbow: 180.0, shoulder: 180.0 }
    }
}

impl JointAngles {
    pub fn new(hip: f64, knee: f64, elbow: f64, shoulder: f64) -> Self {
        Self { hip, knee, elbow, shoulder }
    }

    pub fn get(&self, joint: Joint) -> f64 {
        match joint {
            Joint::Hip => self.hip,
            Joint::Knee => self.knee,
            Joint::Elbow => self.elbow,
            Joint::Shoulder => self.shoulder,
        }
    }

    pub fn set(&mut self, joint: Joint, deg: f64) {
        match joint {
            Joint::Hip => self.hip = deg,
            Joint::Knee => self.knee = deg,
            Joint::Elbow => self.elbow = deg,
            Joint::Shoulder => self.shoulder = deg,
        }
    }
}

/// Per-joint accuracy in integer percent (0..=100). Recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccuracySet {
    pub hip: u8,
    pub knee: u8,
    pub elbow: u8,
    pub shoulder: u8,
}

impl AccuracySet {
    pub fn get(&self, joint: Joint) -> u8 {
        match joint {
            Joint::Hip => self.hip,
            Joint::Knee => self.knee,
            Joint::Elbow => self.elbow,
            Joint::Shoulder => self.shoulder,
        }
    }

    pub fn set(&mut self, joint: Joint, pct: u8) {
        match joint {
            Joint::Hip => self.hip = pct,
            Joint::Knee => self.knee = pct,
            Joint::Elbow => self.elbow = pct,
            Joint::Shoulder => self.shoulder = pct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Good,
    Warning,
    Error,
}

/// One line of form guidance. `status` matcher feltnavnet UI-laget viser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub text: String,
    #[serde(rename = "status")]
    pub severity: Severity,
}

impl FeedbackItem {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self { text: text.into(), severity }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostureStatus {
    Correct,
    Adjust,
    Incorrect,
}

/// Rep-teller-tilstand for én øktsesjon. Nullstilles ved øvelsesbytte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RepetitionState {
    pub count: u64,
    pub in_bottom_position: bool,
}

/// Everything one processed frame surfaces to consumers. Plain data,
/// no references back into detector or rendering state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub pose_detected: bool,
    pub angles: JointAngles,
    pub accuracy: AccuracySet,
    pub overall_accuracy: u8,
    pub status: PostureStatus,
    pub feedback: Vec<FeedbackItem>,
    pub reps: RepetitionState,
}

/// Session-level tally, surfaced on demand. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub started_at: DateTime<Utc>,
    pub frames: u64,
    pub frames_without_pose: u64,
    pub reps: u64,
}
