//! PyO3-bindinger rundt JSON-flaten i [`crate::json`] pluss et stateful
//! session-handle. Python-verten kjører detektoren og mater frames hit.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::TrainerConfig;
use crate::coordinator::UpdateCoordinator;
use crate::json::{self, JsonError};
use crate::reference;
use crate::session::TrainerSession;
use crate::types::JointAngles;
use crate::metrics;

impl From<JsonError> for PyErr {
    fn from(e: JsonError) -> PyErr {
        PyValueError::new_err(e.to_string())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
#[pyo3(signature = (keypoints_json, previous_json = None, confidence_threshold = None))]
pub fn extract_angles_json(
    keypoints_json: &str,
    previous_json: Option<&str>,
    confidence_threshold: Option<f64>,
) -> PyResult<String> {
    Ok(json::extract_angles_json(keypoints_json, previous_json, confidence_threshold)?)
}

#[pyfunction]
#[pyo3(signature = (angles_json, reference_json, aggregation = None))]
pub fn score_accuracy_json(
    angles_json: &str,
    reference_json: &str,
    aggregation: Option<&str>,
) -> PyResult<String> {
    Ok(json::score_accuracy_json(angles_json, reference_json, aggregation)?)
}

#[pyfunction]
pub fn exercise_catalog_json() -> PyResult<String> {
    Ok(json::exercise_catalog_json()?)
}

#[pyfunction]
pub fn partition_feedback_json(feedback_json: &str) -> PyResult<String> {
    Ok(json::partition_feedback_json(feedback_json)?)
}

/// Prometheus text exposition for kjernens tellere.
#[pyfunction]
pub fn render_metrics() -> String {
    metrics::render()
}

/// Python-handle rundt [`TrainerSession`] + [`UpdateCoordinator`].
/// `process_frame` kjører alltid (deteksjonsarbeid throttles aldri);
/// `poll_update` er den kadens-begrensede flaten mot presentasjonslaget.
#[pyclass(name = "Session")]
pub struct PySession {
    inner: TrainerSession,
    coordinator: UpdateCoordinator,
}

#[pymethods]
impl PySession {
    #[new]
    #[pyo3(signature = (exercise = None, reference_json = None, config_json = None))]
    fn new(
        exercise: Option<&str>,
        reference_json: Option<&str>,
        config_json: Option<&str>,
    ) -> PyResult<Self> {
        let config: TrainerConfig = match config_json {
            Some(raw) => json::parse_json("config", raw)?,
            None => TrainerConfig::default(),
        };
        let coordinator = UpdateCoordinator::from_config(&config);

        let inner = match (exercise, reference_json) {
            (Some(name), _) => TrainerSession::for_exercise(config, json::parse_exercise(name)?),
            (None, Some(raw)) => {
                let reference: JointAngles = json::parse_json("reference", raw)?;
                TrainerSession::new(config, reference)
            }
            (None, None) => TrainerSession::new(config, reference::default_reference()),
        }
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(Self { inner, coordinator })
    }

    /// Kjør ett frame. Returnerer full rapport-JSON umiddelbart og legger
    /// samme rapport i latest-wins-slottet for `poll_update`.
    fn process_frame(&mut self, keypoints_json: &str) -> PyResult<String> {
        let keypoints = json::parse_keypoints(keypoints_json)?;
        let report = self.inner.process_frame(&keypoints);
        let out = to_json(&report)?;
        self.coordinator.publish(report);
        Ok(out)
    }

    /// Kadens-begrenset rapport, eller `None` når vinduet ikke er ute
    /// (eller ingenting nytt er beregnet).
    fn poll_update(&self) -> PyResult<Option<String>> {
        match self.coordinator.poll() {
            Some(report) => Ok(Some(to_json(&report)?)),
            None => Ok(None),
        }
    }

    fn set_exercise(&mut self, name: &str) -> PyResult<()> {
        self.inner.set_exercise(json::parse_exercise(name)?);
        Ok(())
    }

    fn set_reference(&mut self, reference_json: &str) -> PyResult<()> {
        let reference: JointAngles = json::parse_json("reference", reference_json)?;
        self.inner
            .set_reference(reference)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn reset_reps(&mut self) {
        self.inner.reset_reps();
    }

    #[getter]
    fn rep_count(&self) -> u64 {
        self.inner.rep_state().count
    }

    fn reference(&self) -> PyResult<String> {
        to_json(&self.inner.reference())
    }

    fn summary(&self) -> PyResult<String> {
        to_json(&self.inner.summary())
    }
}
