use crate::types::RepetitionState;

/// To-tilstands hysteresemaskin for rep-telling på ett sporet ledd.
///
/// Top→Bottom når vinkelen faller under `low_deg`, Bottom→Top (og +1 rep)
/// når den stiger over `high_deg`. Gapet mellom tersklene avviser
/// jitter-doble tellinger rundt én enkelt grense.
#[derive(Debug, Clone)]
pub struct RepTracker {
    low_deg: f64,
    high_deg: f64,
    state: RepetitionState,
}

impl RepTracker {
    /// Tersklene antas validert (low < high) via `TrainerConfig::validate`.
    pub fn new(low_deg: f64, high_deg: f64) -> Self {
        Self { low_deg, high_deg, state: RepetitionState::default() }
    }

    /// Mat inn neste vinkelsample. Returnerer true når en rep fullføres.
    pub fn update(&mut self, angle_deg: f64) -> bool {
        if !self.state.in_bottom_position && angle_deg < self.low_deg {
            self.state.in_bottom_position = true;
            return false;
        }
        if self.state.in_bottom_position && angle_deg > self.high_deg {
            self.state.in_bottom_position = false;
            self.state.count += 1;
            log::info!("rep completed, count={}", self.state.count);
            return true;
        }
        false
    }

    pub fn state(&self) -> RepetitionState {
        self.state
    }

    pub fn count(&self) -> u64 {
        self.state.count
    }

    /// Nullstill ved øvelsesbytte eller omstart av økt.
    pub fn reset(&mut self) {
        self.state = RepetitionState::default();
    }
}
