//! Selection & virtualization planning
//!
//! A conceptually infinite circular reel is rendered as a bounded slot
//! array: the filtered item list repeated `repetition_factor` times, with a
//! "home" position near the middle so an animation can always scroll
//! forward by several full cycles without approaching either physical end.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the planner
///
/// The shape of the trade-off is the contract: richer spins for small
/// sets, a hard render cap for large ones, and correctness of the landing
/// animation winning when the two conflict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Hard cap on concrete rendered slots
    pub max_total_slots: usize,
    /// Extra cycles of headroom on each side of the home zone. Must be
    /// >= 2: a spin launched from the far edge of the home zone travels
    /// up to `min_full_cycles + 2` cycles minus two slots.
    pub safety_margin: usize,
    /// Item-count threshold below which the reel spins 5 full cycles
    pub rich_spin_threshold: usize,
    /// Item-count threshold below which the reel spins 4 full cycles
    pub medium_spin_threshold: usize,
}

impl PlannerConfig {
    /// Minimum full passes through the item list for a spin to feel like
    /// a spin: 5 for small sets, 4 for medium, 3 otherwise.
    pub fn min_full_cycles(&self, item_count: usize) -> usize {
        if item_count < self.rich_spin_threshold {
            5
        } else if item_count < self.medium_spin_threshold {
            4
        } else {
            3
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_total_slots: 2500,
            safety_margin: 2,
            rich_spin_threshold: 50,
            medium_spin_threshold: 200,
        }
    }
}

/// Derived rendering parameters for one filtered item count
///
/// Recomputed whenever the filtered set changes; never mutated while an
/// animation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelPlan {
    /// Filtered item count (> 0)
    pub item_count: usize,
    /// Copies of the item list in the slot array (>= 2)
    pub repetition_factor: usize,
    /// item_count * repetition_factor
    pub total_slots: usize,
    /// Multiple of item_count nearest the middle of the slot array
    pub base_index: usize,
    /// Minimum full cycles a spin traverses before landing
    pub min_full_cycles: usize,
    /// True when the correctness constraint pushed total_slots past the
    /// render cap (large item counts)
    pub over_budget: bool,
}

impl ReelPlan {
    /// Plan a reel for `item_count` items, `None` when the set is empty
    /// (spinning must be disabled by the caller).
    pub fn for_items(item_count: usize, config: &PlannerConfig) -> Option<Self> {
        if item_count == 0 {
            return None;
        }

        let min_full_cycles = config.min_full_cycles(item_count);

        // Constraint (a): enough copies that a spin starting anywhere in
        // the home zone can travel min_full_cycles passes forward and
        // still land inside the array.
        let repetition_factor = (2 * (min_full_cycles + config.safety_margin)).max(2);
        let total_slots = item_count * repetition_factor;

        // Constraint (b): the render cap. (a) wins when they conflict;
        // truncating instead would leave blank rows at the end of a spin.
        let over_budget = total_slots > config.max_total_slots;
        if over_budget {
            log::warn!(
                "reel plan exceeds render cap: {} items x {} copies = {} slots (cap {})",
                item_count,
                repetition_factor,
                total_slots,
                config.max_total_slots
            );
        }

        let base_index = Self::nearest_cycle_start(total_slots / 2, item_count);

        Some(Self {
            item_count,
            repetition_factor,
            total_slots,
            base_index,
            min_full_cycles,
            over_budget,
        })
    }

    /// Multiple of `item_count` nearest to `slot`
    fn nearest_cycle_start(slot: usize, item_count: usize) -> usize {
        let cycle = (slot + item_count / 2) / item_count;
        cycle * item_count
    }

    /// Logical item index displayed at a physical slot
    pub fn item_at_slot(&self, slot: usize) -> usize {
        slot % self.item_count
    }

    /// Home-zone slot for a logical item index
    pub fn home_slot(&self, item_index: usize) -> usize {
        self.base_index + item_index
    }

    /// Slot range [start, end) considered "home" (one full cycle at base)
    pub fn home_zone(&self) -> (usize, usize) {
        (self.base_index, self.base_index + self.item_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_has_no_plan() {
        assert!(ReelPlan::for_items(0, &PlannerConfig::default()).is_none());
    }

    #[test]
    fn test_cycle_tiers() {
        let config = PlannerConfig::default();
        assert_eq!(config.min_full_cycles(5), 5);
        assert_eq!(config.min_full_cycles(49), 5);
        assert_eq!(config.min_full_cycles(50), 4);
        assert_eq!(config.min_full_cycles(199), 4);
        assert_eq!(config.min_full_cycles(200), 3);
        assert_eq!(config.min_full_cycles(1000), 3);
    }

    #[test]
    fn test_repetition_factor_headroom() {
        let config = PlannerConfig::default();
        for n in [1, 2, 5, 50, 200, 500, 1000] {
            let plan = ReelPlan::for_items(n, &config).unwrap();
            assert!(plan.repetition_factor >= 2, "n={n}");
            assert!(
                plan.repetition_factor >= 2 * (plan.min_full_cycles + config.safety_margin),
                "n={n}"
            );
            assert_eq!(plan.total_slots, n * plan.repetition_factor);
        }
    }

    #[test]
    fn test_render_bound_or_explicit_override() {
        let config = PlannerConfig::default();
        for n in [1, 2, 5, 50, 199, 250] {
            let plan = ReelPlan::for_items(n, &config).unwrap();
            assert!(plan.total_slots <= config.max_total_slots, "n={n}");
            assert!(!plan.over_budget, "n={n}");
        }
        // Correctness beats the cap for very large sets
        for n in [251, 500, 1000] {
            let plan = ReelPlan::for_items(n, &config).unwrap();
            assert!(plan.total_slots > config.max_total_slots, "n={n}");
            assert!(plan.over_budget, "n={n}");
            assert!(
                plan.repetition_factor >= 2 * (plan.min_full_cycles + config.safety_margin),
                "n={n}"
            );
        }
    }

    #[test]
    fn test_base_index_is_item_multiple_near_midpoint() {
        let config = PlannerConfig::default();
        for n in [1, 3, 7, 120, 1000] {
            let plan = ReelPlan::for_items(n, &config).unwrap();
            assert_eq!(plan.base_index % n, 0, "n={n}");
            let midpoint = plan.total_slots / 2;
            let distance = plan.base_index.abs_diff(midpoint);
            assert!(distance <= n / 2 + 1, "n={n} base={} mid={midpoint}", plan.base_index);
        }
    }

    #[test]
    fn test_worst_case_spin_stays_inside_array() {
        // Start at the far edge of the home zone, spin the full cycle
        // count plus the longest in-cycle distance.
        let config = PlannerConfig::default();
        for n in [1, 2, 5, 50, 500, 1000] {
            let plan = ReelPlan::for_items(n, &config).unwrap();
            let worst_start = plan.base_index + n - 1;
            let worst_travel = plan.min_full_cycles * n + (n - 1);
            assert!(
                worst_start + worst_travel < plan.total_slots,
                "n={n} overruns the slot array"
            );
        }
    }

    #[test]
    fn test_slot_item_mapping() {
        let plan = ReelPlan::for_items(7, &PlannerConfig::default()).unwrap();
        assert_eq!(plan.item_at_slot(plan.base_index), 0);
        assert_eq!(plan.item_at_slot(plan.base_index + 3), 3);
        assert_eq!(plan.home_slot(3), plan.base_index + 3);
        let (start, end) = plan.home_zone();
        assert_eq!(end - start, 7);
    }
}
