//! Session types: lifecycle phases, outcomes, delivery, stats

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sp_core::ReelItem;

/// Lifecycle phase of the active spin session
///
/// Making the phases explicit (rather than ad-hoc booleans) keeps illegal
/// combinations like "gating while animating" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinPhase {
    /// No spin in flight; the only phase that accepts a spin request
    Idle,
    /// Waiting on the ad gate's async decision
    Gating,
    /// Reel animation running
    Animating,
    /// Landed; brief pause before the result is handed off
    Settling,
}

impl Default for SpinPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// The delivered result of one completed spin
#[derive(Debug, Clone)]
pub struct SpinOutcome<T: ReelItem> {
    /// Sequential spin ID ("spin-000001", ...)
    pub spin_id: String,
    /// The landed item, cloned from the snapshot taken at spin start
    pub item: T,
    /// Index of the item within that snapshot
    pub filtered_index: usize,
    /// Was an interstitial shown before the animation?
    pub ad_shown: bool,
    /// Wall-clock duration of the whole session (ms)
    pub elapsed_ms: f64,
}

/// Receives outcomes once settling completes
pub trait ResultSink<T: ReelItem> {
    /// Hand off a landed item. The engine makes no assumption about what
    /// the host does with it.
    fn deliver(&mut self, outcome: &SpinOutcome<T>);
}

/// Sink that records every outcome behind a shared handle (tests, demos)
pub struct RecordingSink<T: ReelItem> {
    outcomes: Arc<Mutex<Vec<SpinOutcome<T>>>>,
}

impl<T: ReelItem> RecordingSink<T> {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Another handle to the same recording
    pub fn handle(&self) -> Self {
        Self {
            outcomes: Arc::clone(&self.outcomes),
        }
    }

    /// Outcomes delivered so far
    pub fn delivered(&self) -> Vec<SpinOutcome<T>>
    where
        T: Clone,
    {
        self.outcomes.lock().clone()
    }

    /// Number of outcomes delivered so far
    pub fn len(&self) -> usize {
        self.outcomes.lock().len()
    }

    /// Has anything been delivered?
    pub fn is_empty(&self) -> bool {
        self.outcomes.lock().is_empty()
    }
}

impl<T: ReelItem> Default for RecordingSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ReelItem + Clone> ResultSink<T> for RecordingSink<T> {
    fn deliver(&mut self, outcome: &SpinOutcome<T>) {
        self.outcomes.lock().push(outcome.clone());
    }
}

/// Aggregate session bookkeeping
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Spins that ran to completion
    pub total_spins: u64,
    /// Spin requests refused (empty dataset or non-idle session)
    pub refused: u64,
    /// Interstitials shown
    pub ads_shown: u64,
}

impl SessionStats {
    /// Fraction of completed spins that were ad-gated
    pub fn ad_rate(&self) -> f64 {
        if self.total_spins > 0 {
            self.ads_shown as f64 / self.total_spins as f64
        } else {
            0.0
        }
    }
}
