use serde::{Deserialize, Serialize};

use crate::types::{Joint, JointAngles};

/// Øvelseskatalogen. Kun øvelser der bevegelsen er én monoton
/// vinkelekskursjon på ett ledd får automatisk rep-telling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exercise {
    Squats,
    Pushups,
    Lunges,
}

impl Exercise {
    pub fn parse(name: &str) -> Option<Exercise> {
        match name.to_ascii_lowercase().as_str() {
            "squats" | "squat" => Some(Exercise::Squats),
            "pushups" | "pushup" | "push-ups" | "push-up" => Some(Exercise::Pushups),
            "lunges" | "lunge" => Some(Exercise::Lunges),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Exercise::Squats => "Squats",
            Exercise::Pushups => "Push-ups",
            Exercise::Lunges => "Lunges",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Exercise::Squats => {
                "A compound exercise that targets the quadriceps, hamstrings, and glutes."
            }
            Exercise::Pushups => {
                "A compound exercise that targets the chest, shoulders, and triceps."
            }
            Exercise::Lunges => {
                "A unilateral exercise that targets the quadriceps, hamstrings, and glutes."
            }
        }
    }

    /// Ideelle leddvinkler for øvelsen (kataloggrunnlag for referansepose).
    pub fn reference_angles(self) -> JointAngles {
        match self {
            Exercise::Squats => JointAngles::new(90.0, 90.0, 180.0, 180.0),
            Exercise::Pushups => JointAngles::new(180.0, 180.0, 90.0, 45.0),
            Exercise::Lunges => JointAngles::new(120.0, 90.0, 180.0, 180.0),
        }
    }

    /// Leddet rep-telleren sporer, der øvelsen har ett.
    pub fn rep_joint(self) -> Option<Joint> {
        match self {
            Exercise::Squats | Exercise::Lunges => Some(Joint::Knee),
            Exercise::Pushups => Some(Joint::Elbow),
        }
    }

    pub fn instructions(self) -> &'static [&'static str] {
        match self {
            Exercise::Squats => &[
                "Stand with feet shoulder-width apart",
                "Keep your back straight",
                "Lower your body as if sitting in a chair",
                "Keep knees aligned with toes",
                "Return to starting position",
            ],
            Exercise::Pushups => &[
                "Start in a plank position with hands slightly wider than shoulders",
                "Keep your body in a straight line",
                "Lower your chest to the ground",
                "Push back up to starting position",
                "Keep core engaged throughout",
            ],
            Exercise::Lunges => &[
                "Stand with feet hip-width apart",
                "Step forward with one leg",
                "Lower your body until both knees are bent at 90 degrees",
                "Keep front knee aligned with ankle",
                "Push back to starting position",
            ],
        }
    }
}
