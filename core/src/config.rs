use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Joint, JointAngles};

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.3;
pub const DEFAULT_WARN_BREAKPOINT: u8 = 60;
pub const DEFAULT_GOOD_BREAKPOINT: u8 = 80;
pub const DEFAULT_REP_LOW_DEG: f64 = 110.0;
pub const DEFAULT_REP_HIGH_DEG: f64 = 160.0;
pub const DEFAULT_FLUSH_INTERVAL_MS: u64 = 500;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("confidence threshold must be within (0, 1), got {0}")]
    ConfidenceThreshold(f64),
    #[error("accuracy breakpoints must satisfy warn <= good, got warn={warn} good={good}")]
    Breakpoints { warn: u8, good: u8 },
    #[error("accuracy breakpoints must be <= 100, got warn={warn} good={good}")]
    BreakpointRange { warn: u8, good: u8 },
    #[error("rep thresholds must satisfy low < high, got low={low} high={high}")]
    RepThresholds { low: f64, high: f64 },
    #[error("flush interval must be positive")]
    FlushInterval,
    #[error("reference angle for {joint} must be within (0, 180], got {angle}")]
    ReferenceAngle { joint: &'static str, angle: f64 },
}

/// Caller-selectable overall-accuracy aggregation (see også den historiske
/// min-varianten med 85-breakpoint: `aggregation=min`, warn=good=85).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    #[default]
    Mean,
    Min,
}

/// Runtime-konfigurasjon for pipelinen. Alle felt har defaults; valider med
/// [`TrainerConfig::validate`] før bruk — ugyldige kombinasjoner avvises her,
/// aldri under per-frame-prosessering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Keypoints under denne regnes som fraværende.
    pub confidence_threshold: f64,
    /// Overall accuracy >= good → CORRECT.
    pub good_breakpoint: u8,
    /// Overall accuracy >= warn (men < good) → ADJUST, ellers INCORRECT.
    pub warn_breakpoint: u8,
    pub aggregation: Aggregation,
    /// Hysterese: Top→Bottom under low, Bottom→Top over high.
    pub rep_low_deg: f64,
    pub rep_high_deg: f64,
    /// Overstyrer øvelsens rep-ledd. `None` = bruk øvelsens, eller ingen teller.
    pub rep_joint: Option<Joint>,
    /// Koordinatorens flush-kadens mot presentasjonslaget.
    pub flush_interval_ms: u64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            good_breakpoint: DEFAULT_GOOD_BREAKPOINT,
            warn_breakpoint: DEFAULT_WARN_BREAKPOINT,
            aggregation: Aggregation::Mean,
            rep_low_deg: DEFAULT_REP_LOW_DEG,
            rep_high_deg: DEFAULT_REP_HIGH_DEG,
            rep_joint: None,
            flush_interval_ms: DEFAULT_FLUSH_INTERVAL_MS,
        }
    }
}

impl TrainerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.confidence_threshold > 0.0 && self.confidence_threshold < 1.0) {
            return Err(ConfigError::ConfidenceThreshold(self.confidence_threshold));
        }
        if self.warn_breakpoint > self.good_breakpoint {
            return Err(ConfigError::Breakpoints {
                warn: self.warn_breakpoint,
                good: self.good_breakpoint,
            });
        }
        if self.good_breakpoint > 100 {
            return Err(ConfigError::BreakpointRange {
                warn: self.warn_breakpoint,
                good: self.good_breakpoint,
            });
        }
        if !(self.rep_low_deg < self.rep_high_deg) || !self.rep_low_deg.is_finite() {
            return Err(ConfigError::RepThresholds {
                low: self.rep_low_deg,
                high: self.rep_high_deg,
            });
        }
        if self.flush_interval_ms == 0 {
            return Err(ConfigError::FlushInterval);
        }
        Ok(())
    }
}

/// Referansevinkler må ligge i (0, 180]; relativ-feil-metrikken er udefinert
/// ved 0°.
pub fn validate_reference(reference: &JointAngles) -> Result<(), ConfigError> {
    for joint in Joint::ALL {
        let angle = reference.get(joint);
        if !(angle > 0.0 && angle <= 180.0) {
            return Err(ConfigError::ReferenceAngle { joint: joint.label(), angle });
        }
    }
    Ok(())
}
