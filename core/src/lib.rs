pub mod accuracy;
pub mod angles;
pub mod config;
pub mod coordinator;
pub mod exercises;
pub mod feedback;
pub mod json;
pub mod metrics;
pub mod reference;
pub mod reps;
pub mod session;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use config::{Aggregation, ConfigError, TrainerConfig};
pub use coordinator::UpdateCoordinator;
pub use exercises::Exercise;
pub use json::{
    exercise_catalog_json, extract_angles_json, partition_feedback_json, score_accuracy_json,
    JsonError,
};
pub use reference::{CatalogReference, FixedReference, ReferenceProvider};
pub use reps::RepTracker;
pub use session::TrainerSession;
pub use types::{
    AccuracySet, BodyPart, FeedbackItem, FrameReport, Joint, JointAngles, Keypoint,
    PostureStatus, RepetitionState, SessionSummary, Severity,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn formcoach_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<py::PySession>()?;
    m.add_function(wrap_pyfunction!(py::extract_angles_json, m)?)?;
    m.add_function(wrap_pyfunction!(py::score_accuracy_json, m)?)?;
    m.add_function(wrap_pyfunction!(py::partition_feedback_json, m)?)?;
    m.add_function(wrap_pyfunction!(py::exercise_catalog_json, m)?)?;
    m.add_function(wrap_pyfunction!(py::render_metrics, m)?)?;
    Ok(())
}
