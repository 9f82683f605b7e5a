use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

fn counter(name: &str, help: &str) -> IntCounter {
    let c = IntCounter::new(name, help).expect("static counter spec");
    // Registrering kan bare feile ved duplikatnavn; ignorer ved re-init.
    let _ = REGISTRY.register(Box::new(c.clone()));
    c
}

pub static FRAMES_TOTAL: Lazy<IntCounter> =
    Lazy::new(|| counter("formcoach_frames_total", "Frames run through the pose pipeline"));

pub static FRAMES_WITHOUT_POSE_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    counter("formcoach_frames_without_pose_total", "Frames with no confident keypoints")
});

pub static REPS_TOTAL: Lazy<IntCounter> =
    Lazy::new(|| counter("formcoach_reps_total", "Completed repetitions across all sessions"));

pub static FLUSHES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    counter("formcoach_coordinator_flushes_total", "Reports flushed to the presentation layer")
});

pub static DROPPED_REPORTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    counter(
        "formcoach_coordinator_dropped_reports_total",
        "Reports overwritten in the latest-wins slot before a flush",
    )
});

/// Prometheus text exposition av alle kjernetellere.
pub fn render() -> String {
    let mut buf = Vec::new();
    let encoder = TextEncoder::new();
    if encoder.encode(&REGISTRY.gather(), &mut buf).is_err() {
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}
