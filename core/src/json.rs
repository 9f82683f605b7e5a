//! Tolerant JSON-flate mot verten (der posedetektoren kjører).
//!
//! Inndata aksepteres i to former: navngitte keypoint-objekter, eller den rå
//! MoveNet-matrisen `[[y, x, score]; 17]` i kanonisk rekkefølge. Felt-alias
//! gjør flaten robust mot camelCase/snake_case-varianter fra ulike verter.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::{self, Aggregation, ConfigError};
use crate::exercises::Exercise;
use crate::types::{BodyPart, FeedbackItem, JointAngles, Keypoint};
use crate::{accuracy, angles, feedback};

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("{context}: {message}")]
    Parse { context: &'static str, message: String },
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown aggregation policy {0:?} (expected \"mean\" or \"min\")")]
    Aggregation(String),
    #[error("unknown exercise {0:?}")]
    Exercise(String),
}

/// Deserialiser med felt-sti i feilmeldingen (serde_path_to_error) slik at
/// verten ser hvor inputen var gal.
pub fn parse_json<T: DeserializeOwned>(context: &'static str, raw: &str) -> Result<T, JsonError> {
    let de = &mut serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(de)
        .map_err(|e| JsonError::Parse { context, message: e.to_string() })
}

#[derive(Debug, Deserialize)]
struct KeypointIn {
    #[serde(alias = "part", alias = "bodyPart")]
    name: String,
    x: f64,
    y: f64,
    #[serde(default, alias = "confidence")]
    score: Option<f64>,
}

/// Objektform først, så legacy-matrisen (som hos MoveNet: [y, x, score]).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KeypointsIn {
    Named(Vec<KeypointIn>),
    Triples(Vec<[f64; 3]>),
}

/// Ukjente keypoint-navn hoppes over; kjernen bryr seg bare om de 17 kjente.
pub fn parse_keypoints(raw: &str) -> Result<Vec<Keypoint>, JsonError> {
    let parsed: KeypointsIn = parse_json("keypoints", raw)?;
    let out = match parsed {
        KeypointsIn::Named(list) => list
            .into_iter()
            .filter_map(|k| match BodyPart::parse(&k.name) {
                Some(part) => Some(Keypoint {
                    part,
                    x: k.x,
                    y: k.y,
                    score: k.score.unwrap_or(1.0),
                }),
                None => {
                    log::warn!("ignoring unknown keypoint name {:?}", k.name);
                    None
                }
            })
            .collect(),
        KeypointsIn::Triples(rows) => rows
            .into_iter()
            .enumerate()
            .filter_map(|(i, [y, x, score])| {
                BodyPart::from_index(i).map(|part| Keypoint { part, x, y, score })
            })
            .collect(),
    };
    Ok(out)
}

pub fn parse_aggregation(name: &str) -> Result<Aggregation, JsonError> {
    match name.to_ascii_lowercase().as_str() {
        "mean" => Ok(Aggregation::Mean),
        "min" | "minimum" => Ok(Aggregation::Min),
        other => Err(JsonError::Aggregation(other.to_string())),
    }
}

pub fn parse_exercise(name: &str) -> Result<Exercise, JsonError> {
    Exercise::parse(name).ok_or_else(|| JsonError::Exercise(name.to_string()))
}

/// Ekstraher leddvinkler fra ett frame. `previous_json` er forrige frames
/// vinkler for carry-forward; utelatt = nøytral 180°-baseline.
pub fn extract_angles_json(
    keypoints_json: &str,
    previous_json: Option<&str>,
    confidence_threshold: Option<f64>,
) -> Result<String, JsonError> {
    let keypoints = parse_keypoints(keypoints_json)?;
    let previous = match previous_json {
        Some(raw) => parse_json::<JointAngles>("previous", raw)?,
        None => JointAngles::default(),
    };
    let threshold = confidence_threshold.unwrap_or(config::DEFAULT_CONFIDENCE_THRESHOLD);
    let out = angles::extract_angles(&keypoints, &previous, threshold);
    Ok(serde_json::to_string(&out)?)
}

/// Score vinkler mot en referanse. Returnerer per-ledd accuracy pluss
/// `overall` under valgt policy (default mean).
pub fn score_accuracy_json(
    angles_json: &str,
    reference_json: &str,
    aggregation: Option<&str>,
) -> Result<String, JsonError> {
    let observed: JointAngles = parse_json("angles", angles_json)?;
    let reference: JointAngles = parse_json("reference", reference_json)?;
    config::validate_reference(&reference)?;

    let policy = match aggregation {
        Some(name) => parse_aggregation(name)?,
        None => Aggregation::Mean,
    };
    let set = accuracy::score(&observed, &reference);
    let overall = accuracy::overall(&set, policy);

    Ok(serde_json::to_string(&json!({
        "Hip": set.hip,
        "Knee": set.knee,
        "Elbow": set.elbow,
        "Shoulder": set.shoulder,
        "overall": overall,
    }))?)
}

/// Hele øvelseskatalogen som JSON (navn, referansevinkler, instruksjoner).
pub fn exercise_catalog_json() -> Result<String, JsonError> {
    let entries: Vec<_> = [Exercise::Squats, Exercise::Pushups, Exercise::Lunges]
        .iter()
        .map(|e| {
            json!({
                "id": e,
                "name": e.name(),
                "description": e.description(),
                "reference_angles": e.reference_angles(),
                "rep_joint": e.rep_joint(),
                "instructions": e.instructions(),
            })
        })
        .collect();
    Ok(serde_json::to_string(&entries)?)
}

/// Del feedback i "good form" / "needs improvement" slik UI-et viser det.
pub fn partition_feedback_json(feedback_json: &str) -> Result<String, JsonError> {
    let items: Vec<FeedbackItem> = parse_json("feedback", feedback_json)?;
    let (good, needs_work) = feedback::partition(&items);
    Ok(serde_json::to_string(&json!({
        "good": good,
        "needs_improvement": needs_work,
    }))?)
}
