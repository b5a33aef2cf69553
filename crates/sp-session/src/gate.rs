//! Ad gating
//!
//! The gate decides whether a rate-limited interstitial runs before the
//! reel animation starts. Its rate-limit state (spin counter, last-ad
//! timestamp) is shared, process-wide and written only by the gate itself;
//! the session layer reads the decision and reports completed spins after
//! the fact. The contract is bounded-time resolution: a gate that cannot
//! load or show an ad resolves to "no ad", it never blocks the lifecycle.

use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Outcome of a gate consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdOutcome {
    /// Was an interstitial actually shown?
    pub shown: bool,
}

impl AdOutcome {
    /// An ad was presented
    pub fn presented() -> Self {
        Self { shown: true }
    }

    /// No ad (not due, failed to load, or gate disabled)
    pub fn skipped() -> Self {
        Self { shown: false }
    }
}

/// Gate consulted once per spin while the session is `Gating`
#[allow(async_fn_in_trait)]
pub trait AdGate {
    /// Would an ad run before the next spin?
    fn should_gate(&self) -> bool;

    /// Present the interstitial if one is due. Must resolve within a
    /// bounded time even on failure; failures map to `AdOutcome::skipped`.
    async fn present_if_needed(&self) -> AdOutcome;

    /// Called by the session layer after a spin completes, so the gate
    /// can advance its own counters.
    fn record_spin(&self) {}
}

/// Gate for hosts without ads (and for tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdGate;

impl AdGate for NoAdGate {
    fn should_gate(&self) -> bool {
        false
    }

    async fn present_if_needed(&self) -> AdOutcome {
        AdOutcome::skipped()
    }
}

/// Rate-limit tuning for [`IntervalAdGate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdGateConfig {
    /// Spins that must complete between two ads
    pub min_spins_between_ads: u32,
    /// Wall-clock minimum between two ads
    #[serde(with = "duration_ms")]
    pub min_interval: Duration,
}

impl Default for AdGateConfig {
    fn default() -> Self {
        Self {
            min_spins_between_ads: 3,
            min_interval: Duration::from_secs(60),
        }
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        (d.as_millis() as u64).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}

#[derive(Debug, Default)]
struct GateState {
    spins_since_ad: u32,
    last_shown: Option<Instant>,
}

/// Interval-based interstitial gate
///
/// Shows an ad once both limits have elapsed: at least
/// `min_spins_between_ads` spins since the last ad, and at least
/// `min_interval` of wall-clock time.
#[derive(Debug)]
pub struct IntervalAdGate {
    config: AdGateConfig,
    state: Mutex<GateState>,
}

impl IntervalAdGate {
    /// Create with config
    pub fn new(config: AdGateConfig) -> Self {
        Self {
            config,
            state: Mutex::new(GateState::default()),
        }
    }

    /// Spins completed since the last ad
    pub fn spins_since_ad(&self) -> u32 {
        self.state.lock().spins_since_ad
    }

    fn due(&self, state: &GateState) -> bool {
        if state.spins_since_ad < self.config.min_spins_between_ads {
            return false;
        }
        match state.last_shown {
            Some(at) => at.elapsed() >= self.config.min_interval,
            None => true,
        }
    }
}

impl AdGate for IntervalAdGate {
    fn should_gate(&self) -> bool {
        self.due(&self.state.lock())
    }

    async fn present_if_needed(&self) -> AdOutcome {
        let mut state = self.state.lock();
        if !self.due(&state) {
            return AdOutcome::skipped();
        }
        // The host SDK presentation hooks in here; the gate itself only
        // keeps the books.
        state.spins_since_ad = 0;
        state.last_shown = Some(Instant::now());
        log::debug!("interstitial presented");
        AdOutcome::presented()
    }

    fn record_spin(&self) {
        self.state.lock().spins_since_ad += 1;
    }
}
