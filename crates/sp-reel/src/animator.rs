//! Reel animation controller
//!
//! Owns the continuous scroll position over the planned slot array. A spin
//! picks its target up front, computes a forward-only travel distance of at
//! least `min_full_cycles` full passes, then drives the position along a
//! single ease-out curve. Landing re-bases the position into the home zone
//! atomically with leaving the animating state, so repeated spins never
//! drift toward the physical ends of the array.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::easing::Easing;
use crate::plan::{PlannerConfig, ReelPlan};
use crate::timing::TimingConfig;

/// In-flight spin animation
#[derive(Debug, Clone, Copy)]
struct ActiveSpin {
    /// Target filtered-item index, fixed for the whole spin
    target_index: usize,
    /// Scroll position at launch
    from_position: f64,
    /// Final scroll position (the slot the reel visually stops on)
    to_position: f64,
    /// Curve duration (ms)
    duration_ms: f64,
    /// Deceleration curve
    easing: Easing,
}

/// Result of advancing the animation clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinProgress {
    /// No spin in flight
    Idle,
    /// Animation running; current scroll position
    Running { position: f64 },
    /// Animation finished and the position was re-based; the reported
    /// index is the target chosen at launch
    Landed { target_index: usize },
}

/// Ticket returned when a spin is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTicket {
    /// The index the reel will land on (and report)
    pub target_index: usize,
    /// Physical slot the animation stops on, before re-basing
    pub final_slot: usize,
    /// Animator generation at launch, for stale-completion checks
    pub generation: u64,
}

/// Reel animation controller
pub struct ReelAnimator {
    planner: PlannerConfig,
    plan: Option<ReelPlan>,
    scroll_position: f64,
    active: Option<ActiveSpin>,
    generation: u64,
    rng: StdRng,
}

impl ReelAnimator {
    /// Create an animator with default planner tuning and no dataset
    pub fn new() -> Self {
        Self::with_planner(PlannerConfig::default())
    }

    /// Create with specific planner tuning
    pub fn with_planner(planner: PlannerConfig) -> Self {
        Self {
            planner,
            plan: None,
            scroll_position: 0.0,
            active: None,
            generation: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed the RNG for reproducible spins
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Rebuild the plan for a new filtered item count
    ///
    /// Cancels any in-flight animation, bumps the generation (so stale
    /// completions are discarded by the session layer) and snaps the reel
    /// to the home position.
    pub fn rebuild(&mut self, item_count: usize) {
        self.generation = self.generation.wrapping_add(1);
        self.active = None;
        self.plan = ReelPlan::for_items(item_count, &self.planner);
        self.scroll_position = match self.plan {
            Some(ref plan) => plan.base_index as f64,
            None => 0.0,
        };
        log::debug!(
            "reel rebuilt: {} items, generation {}",
            item_count,
            self.generation
        );
    }

    /// Current plan, if a non-empty dataset is loaded
    pub fn plan(&self) -> Option<&ReelPlan> {
        self.plan.as_ref()
    }

    /// Generation counter, bumped on every rebuild
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Continuous scroll position in item-height units
    pub fn scroll_position(&self) -> f64 {
        self.scroll_position
    }

    /// Is a spin animation in flight?
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Can a spin be started right now?
    pub fn can_spin(&self) -> bool {
        self.plan.is_some() && self.active.is_none()
    }

    /// Physical slot currently centered by the scroll position
    pub fn current_centered_slot(&self) -> Option<usize> {
        let plan = self.plan.as_ref()?;
        let slot = self.scroll_position.round().max(0.0) as usize;
        Some(slot.min(plan.total_slots - 1))
    }

    /// Logical item index currently centered
    pub fn current_item_index(&self) -> Option<usize> {
        let plan = self.plan.as_ref()?;
        Some(plan.item_at_slot(self.current_centered_slot()?))
    }

    /// Instantly center a filtered item index (load / filter change).
    /// No-op while animating or when the index is out of range.
    pub fn snap_to(&mut self, item_index: usize) {
        let Some(plan) = self.plan.as_ref() else {
            return;
        };
        if self.active.is_some() || item_index >= plan.item_count {
            return;
        }
        self.scroll_position = plan.home_slot(item_index) as f64;
    }

    /// Start a spin: pick a uniform target and fix the landing curve
    ///
    /// Returns `None` (a safe no-op) when no dataset is loaded or a spin
    /// is already in flight; state, including any active target, is left
    /// untouched.
    pub fn begin_spin(&mut self, timing: &TimingConfig) -> Option<SpinTicket> {
        if !self.can_spin() {
            return None;
        }
        let plan = *self.plan.as_ref()?;
        let n = plan.item_count;

        let target_index = self.rng.random_range(0..n);

        // Minimal non-negative forward distance from the currently
        // centered item to the target, plus the mandatory full cycles.
        // Forward-only: a reel that reverses looks broken.
        let current_slot = self.scroll_position.round().max(0.0) as usize;
        let current_item = plan.item_at_slot(current_slot);
        let forward = (target_index + n - current_item) % n;
        let travel = plan.min_full_cycles * n + forward;
        let final_slot = current_slot + travel;
        debug_assert!(final_slot < plan.total_slots, "spin overran the slot array");

        self.active = Some(ActiveSpin {
            target_index,
            from_position: self.scroll_position,
            to_position: final_slot as f64,
            duration_ms: timing.spin_duration_ms,
            easing: timing.easing,
        });

        log::debug!(
            "spin launched: target {target_index}/{n}, slot {current_slot} -> {final_slot}"
        );

        Some(SpinTicket {
            target_index,
            final_slot,
            generation: self.generation,
        })
    }

    /// Advance the animation to `elapsed_ms` since launch
    ///
    /// On completion the scroll position is re-based to the home-zone slot
    /// of the target in the same call that clears the animating state;
    /// there is no observable moment between "landed" and "re-based".
    pub fn tick(&mut self, elapsed_ms: f64) -> SpinProgress {
        let Some(spin) = self.active else {
            return SpinProgress::Idle;
        };

        // A plan always exists while a spin is active; a rebuild clears
        // both together.
        let Some(plan) = self.plan else {
            self.active = None;
            return SpinProgress::Idle;
        };

        if elapsed_ms >= spin.duration_ms || spin.duration_ms <= 0.0 {
            debug_assert_eq!(
                plan.item_at_slot(spin.to_position as usize),
                spin.target_index
            );
            self.scroll_position = plan.home_slot(spin.target_index) as f64;
            self.active = None;
            return SpinProgress::Landed {
                target_index: spin.target_index,
            };
        }

        let t = elapsed_ms / spin.duration_ms;
        let eased = spin.easing.apply(t);
        self.scroll_position =
            spin.from_position + (spin.to_position - spin.from_position) * eased;
        SpinProgress::Running {
            position: self.scroll_position,
        }
    }
}

impl Default for ReelAnimator {
    fn default() -> Self {
        Self::new()
    }
}
