use chrono::{DateTime, Utc};

use crate::accuracy;
use crate::angles;
use crate::config::{self, ConfigError, TrainerConfig};
use crate::exercises::Exercise;
use crate::feedback;
use crate::metrics;
use crate::reference::ReferenceProvider;
use crate::reps::RepTracker;
use crate::types::{
    FrameReport, Joint, JointAngles, Keypoint, RepetitionState, SessionSummary,
};

/// Driver hele per-frame-pipelinen og eier carry-forward-tilstanden:
/// forrige frames vinkler, rep-telleren og økt-telleverket. Ingen
/// detektor- eller rendering-tilstand lever her.
pub struct TrainerSession {
    config: TrainerConfig,
    reference: JointAngles,
    exercise: Option<Exercise>,
    previous: JointAngles,
    reps: Option<RepTracker>,
    started_at: DateTime<Utc>,
    frames: u64,
    frames_without_pose: u64,
}

impl TrainerSession {
    /// Ny økt med kaller-levert referanse. Konfig og referanse valideres
    /// her; per-frame-prosesseringen er deretter total.
    pub fn new(config: TrainerConfig, reference: JointAngles) -> Result<Self, ConfigError> {
        config.validate()?;
        config::validate_reference(&reference)?;

        let reps = config
            .rep_joint
            .map(|_| RepTracker::new(config.rep_low_deg, config.rep_high_deg));

        Ok(Self {
            config,
            reference,
            exercise: None,
            previous: JointAngles::default(),
            reps,
            started_at: Utc::now(),
            frames: 0,
            frames_without_pose: 0,
        })
    }

    /// Ny økt fra en referansekilde (katalog eller trenervideo-avledet).
    pub fn from_provider(
        config: TrainerConfig,
        provider: &dyn ReferenceProvider,
    ) -> Result<Self, ConfigError> {
        Self::new(config, provider.reference_angles())
    }

    /// Ny økt mot katalogreferansen for en øvelse. Øvelsens rep-ledd brukes
    /// med mindre konfigen overstyrer det.
    pub fn for_exercise(config: TrainerConfig, exercise: Exercise) -> Result<Self, ConfigError> {
        config.validate()?;
        let reference = exercise.reference_angles();
        config::validate_reference(&reference)?;

        let rep_joint = config.rep_joint.or_else(|| exercise.rep_joint());
        let reps = rep_joint.map(|_| RepTracker::new(config.rep_low_deg, config.rep_high_deg));

        Ok(Self {
            config,
            reference,
            exercise: Some(exercise),
            previous: JointAngles::default(),
            reps,
            started_at: Utc::now(),
            frames: 0,
            frames_without_pose: 0,
        })
    }

    /// Kjør ett frame gjennom ekstraksjon → scoring → feedback → rep-telling.
    /// Total over alle input, inkludert tomt keypoint-sett.
    pub fn process_frame(&mut self, keypoints: &[Keypoint]) -> FrameReport {
        self.frames += 1;
        metrics::FRAMES_TOTAL.inc();

        let threshold = self.config.confidence_threshold;
        let pose_detected = angles::pose_present(keypoints, threshold);

        let extracted = angles::extract_angles(keypoints, &self.previous, threshold);
        self.previous = extracted;

        let accuracy = accuracy::score(&extracted, &self.reference);
        let overall = accuracy::overall(&accuracy, self.config.aggregation);
        let status = feedback::posture_status(overall, &self.config);
        let items = feedback::generate(
            &extracted,
            &self.reference,
            &accuracy,
            keypoints,
            overall,
            &self.config,
        );

        if pose_detected {
            let joint = self.rep_joint();
            if let (Some(tracker), Some(joint)) = (self.reps.as_mut(), joint) {
                if tracker.update(extracted.get(joint)) {
                    metrics::REPS_TOTAL.inc();
                }
            }
        } else {
            self.frames_without_pose += 1;
            metrics::FRAMES_WITHOUT_POSE_TOTAL.inc();
            log::debug!("no pose in frame {}, scoring stale angles", self.frames);
        }

        FrameReport {
            pose_detected,
            angles: extracted,
            accuracy,
            overall_accuracy: overall,
            status,
            feedback: items,
            reps: self.rep_state(),
        }
    }

    fn rep_joint(&self) -> Option<Joint> {
        self.config.rep_joint.or_else(|| self.exercise.and_then(Exercise::rep_joint))
    }

    pub fn rep_state(&self) -> RepetitionState {
        self.reps.as_ref().map(RepTracker::state).unwrap_or_default()
    }

    /// Bytt øvelse: ny katalogreferanse, ny carry-forward-baseline og
    /// nullstilt rep-teller.
    pub fn set_exercise(&mut self, exercise: Exercise) {
        log::info!("exercise change → {}", exercise.name());
        self.exercise = Some(exercise);
        self.reference = exercise.reference_angles();
        self.previous = JointAngles::default();
        let rep_joint = self.config.rep_joint.or_else(|| exercise.rep_joint());
        self.reps =
            rep_joint.map(|_| RepTracker::new(self.config.rep_low_deg, self.config.rep_high_deg));
    }

    /// Bytt til kaller-levert referanse (f.eks. fra trenervideo).
    pub fn set_reference(&mut self, reference: JointAngles) -> Result<(), ConfigError> {
        config::validate_reference(&reference)?;
        self.reference = reference;
        self.exercise = None;
        if let Some(t) = self.reps.as_mut() {
            t.reset();
        }
        Ok(())
    }

    pub fn reset_reps(&mut self) {
        if let Some(t) = self.reps.as_mut() {
            t.reset();
        }
    }

    pub fn reference(&self) -> JointAngles {
        self.reference
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn exercise(&self) -> Option<Exercise> {
        self.exercise
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            started_at: self.started_at,
            frames: self.frames,
            frames_without_pose: self.frames_without_pose,
            reps: self.rep_state().count,
        }
    }
}
