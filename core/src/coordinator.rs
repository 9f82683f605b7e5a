use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::config::TrainerConfig;
use crate::metrics;
use crate::types::FrameReport;

struct Slot {
    report: Option<FrameReport>,
    last_flush: Option<Instant>,
}

/// Frakobler deteksjonsrate fra presentasjonsrate: produsenten publiserer
/// hver frame uten å bremses, konsumenten poller og får høyst én rapport
/// per flush-kadens. Ett-slots "latest wins"-buffer — ingen kø, ingen
/// backlog; mellomresultater i vinduet forkastes.
pub struct UpdateCoordinator {
    slot: Mutex<Slot>,
    interval: Duration,
}

impl UpdateCoordinator {
    pub fn new(interval: Duration) -> Self {
        Self {
            slot: Mutex::new(Slot { report: None, last_flush: None }),
            interval,
        }
    }

    pub fn from_config(config: &TrainerConfig) -> Self {
        Self::new(Duration::from_millis(config.flush_interval_ms))
    }

    /// Legg inn siste beregnede rapport. Overskriver eventuelt upublisert
    /// innhold; blokkerer aldri på konsumenten.
    pub fn publish(&self, report: FrameReport) {
        let mut slot = self.slot.lock().unwrap();
        if slot.report.is_some() {
            metrics::DROPPED_REPORTS_TOTAL.inc();
        }
        slot.report = Some(report);
    }

    /// Poll med eksplisitt klokke (testbar). Returnerer rapporten når
    /// kadensen har løpt ut og slottet har innhold; ellers `None`.
    /// Et tomt slot flytter ikke kadensvinduet.
    pub fn poll_at(&self, now: Instant) -> Option<FrameReport> {
        let mut slot = self.slot.lock().unwrap();

        let due = match slot.last_flush {
            None => true,
            Some(prev) => now.duration_since(prev) >= self.interval,
        };
        if !due || slot.report.is_none() {
            return None;
        }

        slot.last_flush = Some(now);
        metrics::FLUSHES_TOTAL.inc();
        slot.report.take()
    }

    /// Poll mot veggklokken.
    pub fn poll(&self) -> Option<FrameReport> {
        self.poll_at(Instant::now())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
