//! Spin coordinator — the lifecycle state machine
//!
//! Owns the reel, the current catalog + filter criteria, and the gate.
//! `spin()` runs one full session: `Idle -> Gating -> Animating ->
//! Settling -> Idle`. Within a session the stages are strictly sequential;
//! the `Idle` guard means no two sessions can overlap on one coordinator,
//! and a spin, once started, is not cancellable by further user input.

use std::time::{Duration, Instant};

use sp_core::{apply_indices, FilterCriteria, ReelItem};
use sp_reel::{PlannerConfig, ReelAnimator, ReelPlan, SpinProgress, TimingConfig};

use crate::gate::AdGate;
use crate::session::{ResultSink, SessionStats, SpinOutcome, SpinPhase};

/// Default upper bound on how long the gate may take to resolve
const DEFAULT_GATE_TIMEOUT: Duration = Duration::from_secs(5);

/// Coordinates filtering, gating, the reel animation and result delivery
pub struct SpinCoordinator<T: ReelItem + Clone, G: AdGate> {
    items: Vec<T>,
    criteria: FilterCriteria,
    /// Indices into `items` that pass `criteria`, in input order
    filtered: Vec<usize>,
    reel: ReelAnimator,
    timing: TimingConfig,
    gate: G,
    gate_timeout: Duration,
    phase: SpinPhase,
    stats: SessionStats,
    sink: Option<Box<dyn ResultSink<T>>>,
    spin_count: u64,
}

impl<T: ReelItem + Clone, G: AdGate> SpinCoordinator<T, G> {
    /// Create with a gate, default timing and planner tuning
    pub fn new(gate: G) -> Self {
        Self {
            items: Vec::new(),
            criteria: FilterCriteria::none(),
            filtered: Vec::new(),
            reel: ReelAnimator::new(),
            timing: TimingConfig::default(),
            gate,
            gate_timeout: DEFAULT_GATE_TIMEOUT,
            phase: SpinPhase::Idle,
            stats: SessionStats::default(),
            sink: None,
            spin_count: 0,
        }
    }

    /// Create with specific planner tuning
    pub fn with_planner(gate: G, planner: PlannerConfig) -> Self {
        let mut coordinator = Self::new(gate);
        coordinator.reel = ReelAnimator::with_planner(planner);
        coordinator
    }

    /// Replace the catalog; re-applies the current criteria
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.refresh();
    }

    /// Replace the filter criteria; re-applies over the current catalog
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    /// Set the timing profile
    pub fn set_timing(&mut self, timing: TimingConfig) {
        self.timing = timing;
    }

    /// Bound how long the gate may take before it degrades to "no ad"
    pub fn set_gate_timeout(&mut self, timeout: Duration) {
        self.gate_timeout = timeout;
    }

    /// Attach a result sink
    pub fn set_sink(&mut self, sink: Box<dyn ResultSink<T>>) {
        self.sink = Some(sink);
    }

    /// Detach the result sink, returning it
    pub fn take_sink(&mut self) -> Option<Box<dyn ResultSink<T>>> {
        self.sink.take()
    }

    /// Seed the reel RNG for reproducible spins
    pub fn seed(&mut self, seed: u64) {
        self.reel.seed(seed);
    }

    /// Items passing the current criteria, in catalog order
    pub fn filtered_items(&self) -> Vec<&T> {
        self.filtered.iter().map(|&i| &self.items[i]).collect()
    }

    /// Count of items passing the current criteria
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    /// Session statistics
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Current reel plan (None when the filtered set is empty)
    pub fn plan(&self) -> Option<&ReelPlan> {
        self.reel.plan()
    }

    /// Reel scroll position (for hosts that render the reel)
    pub fn scroll_position(&self) -> f64 {
        self.reel.scroll_position()
    }

    /// Can a spin start right now?
    pub fn can_spin(&self) -> bool {
        self.phase == SpinPhase::Idle && self.reel.can_spin()
    }

    /// Abandon any session state and rebuild the reel (dataset teardown).
    /// Bumps the reel generation, so a completion from before the reset
    /// can never be delivered.
    pub fn reset(&mut self) {
        self.phase = SpinPhase::Idle;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.filtered = apply_indices(&self.items, &self.criteria);
        self.reel.rebuild(self.filtered.len());
        log::debug!(
            "catalog refreshed: {}/{} items pass the filter",
            self.filtered.len(),
            self.items.len()
        );
    }

    /// Run one spin session to completion
    ///
    /// Returns `None` without side effects when the session is not idle or
    /// the filtered set is empty (the host should have disabled the
    /// control; mis-calls are safe no-ops, never errors). Otherwise the
    /// returned outcome names the landed item from the snapshot taken at
    /// spin start, and the same outcome is handed to the sink.
    pub async fn spin(&mut self) -> Option<SpinOutcome<T>> {
        if self.phase != SpinPhase::Idle || !self.reel.can_spin() {
            self.stats.refused += 1;
            log::debug!("spin refused (phase {:?})", self.phase);
            return None;
        }

        let started = Instant::now();
        self.spin_count += 1;
        let spin_id = format!("spin-{:06}", self.spin_count);

        // Snapshot the filtered set: an in-flight spin resolves against
        // the set that was current when it began.
        let snapshot: Vec<T> = self
            .filtered
            .iter()
            .map(|&i| self.items[i].clone())
            .collect();

        // ── Gating ──────────────────────────────────────────────────────
        self.phase = SpinPhase::Gating;
        let ad_shown = if self.gate.should_gate() {
            match tokio::time::timeout(self.gate_timeout, self.gate.present_if_needed()).await {
                Ok(outcome) => outcome.shown,
                Err(_) => {
                    log::warn!("{spin_id}: ad gate timed out, continuing without ad");
                    false
                }
            }
        } else {
            false
        };

        // ── Animating ───────────────────────────────────────────────────
        self.phase = SpinPhase::Animating;
        let Some(ticket) = self.reel.begin_spin(&self.timing) else {
            // Unreachable under the idle guard; recover instead of hanging
            self.phase = SpinPhase::Idle;
            self.stats.refused += 1;
            return None;
        };

        let frame = Duration::from_micros((self.timing.frame_interval_ms * 1000.0) as u64);
        let clock = Instant::now();
        let landed = loop {
            match self.reel.tick(clock.elapsed().as_secs_f64() * 1000.0) {
                SpinProgress::Landed { target_index } => break target_index,
                SpinProgress::Running { .. } => tokio::time::sleep(frame).await,
                SpinProgress::Idle => {
                    // Reel torn down under us; abandon the session
                    self.phase = SpinPhase::Idle;
                    return None;
                }
            }
        };
        debug_assert_eq!(landed, ticket.target_index);

        if self.reel.generation() != ticket.generation {
            // Stale completion: the reel was rebuilt for a new dataset
            log::debug!("{spin_id}: stale completion dropped");
            self.phase = SpinPhase::Idle;
            return None;
        }

        // ── Settling ────────────────────────────────────────────────────
        self.phase = SpinPhase::Settling;
        if self.timing.settle_delay_ms > 0.0 {
            tokio::time::sleep(Duration::from_micros(
                (self.timing.settle_delay_ms * 1000.0) as u64,
            ))
            .await;
        }

        self.gate.record_spin();
        self.stats.total_spins += 1;
        if ad_shown {
            self.stats.ads_shown += 1;
        }

        let outcome = SpinOutcome {
            spin_id,
            item: snapshot[landed].clone(),
            filtered_index: landed,
            ad_shown,
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        };
        log::debug!(
            "{}: landed on '{}' ({}/{})",
            outcome.spin_id,
            outcome.item.label(),
            landed,
            snapshot.len()
        );

        if let Some(sink) = self.sink.as_mut() {
            sink.deliver(&outcome);
        }
        self.phase = SpinPhase::Idle;
        Some(outcome)
    }
}
