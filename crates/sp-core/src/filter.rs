//! Filter criteria and evaluation
//!
//! Pure, order-preserving filtering over a catalog. Cheap enough to run on
//! every toggle; no caching, no debouncing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::item::{PriceTier, ReelItem};

/// User-selected filter constraints. Empty sets mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Keep items whose tag set intersects this set (when non-empty)
    pub tags: BTreeSet<String>,
    /// Keep items whose tier is a member of this set (when non-empty)
    pub tiers: BTreeSet<PriceTier>,
}

impl FilterCriteria {
    /// No constraints: every item passes
    pub fn none() -> Self {
        Self::default()
    }

    /// Add a tag constraint
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Add a tier constraint
    pub fn with_tier(mut self, tier: PriceTier) -> Self {
        self.tiers.insert(tier);
        self
    }

    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.tiers.is_empty()
    }

    /// Does `item` satisfy both constraints?
    ///
    /// Tag constraint passes when the item's tag set is non-disjoint with
    /// the selected tags. Tier constraint passes on membership. Both are
    /// ANDed when both are active. Items without a tier fail an active
    /// tier constraint.
    pub fn matches(&self, item: &impl ReelItem) -> bool {
        if !self.tags.is_empty() && !item.tags().iter().any(|t| self.tags.contains(t)) {
            return false;
        }
        if !self.tiers.is_empty() {
            match item.tier() {
                Some(tier) if self.tiers.contains(&tier) => {}
                _ => return false,
            }
        }
        true
    }
}

/// Apply criteria to a list, preserving input order
pub fn apply<'a, T: ReelItem>(items: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    items.iter().filter(|i| criteria.matches(*i)).collect()
}

/// Apply criteria, returning indices into `items` in input order
pub fn apply_indices<T: ReelItem>(items: &[T], criteria: &FilterCriteria) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, i)| criteria.matches(*i))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::StoreItem;

    fn sample_items() -> Vec<StoreItem> {
        vec![
            StoreItem::new("s1", "Taqueria")
                .with_tag("mexican")
                .with_tier(PriceTier::Budget),
            StoreItem::new("s2", "Bistro")
                .with_tag("french")
                .with_tier(PriceTier::Premium),
            StoreItem::new("s3", "Diner")
                .with_tag("american")
                .with_tag("breakfast")
                .with_tier(PriceTier::Standard),
            StoreItem::new("s4", "Food Truck").with_tag("mexican"),
        ]
    }

    #[test]
    fn test_empty_criteria_passes_everything() {
        let items = sample_items();
        let filtered = apply(&items, &FilterCriteria::none());
        assert_eq!(filtered.len(), items.len());
        // Order preserved
        assert_eq!(filtered[0].name, "Taqueria");
        assert_eq!(filtered[3].name, "Food Truck");
    }

    #[test]
    fn test_tag_intersection() {
        let items = sample_items();
        let criteria = FilterCriteria::none().with_tag("mexican");
        let filtered = apply(&items, &criteria);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Taqueria");
        assert_eq!(filtered[1].name, "Food Truck");
    }

    #[test]
    fn test_tier_membership_and_missing_tier() {
        let items = sample_items();
        let criteria = FilterCriteria::none().with_tier(PriceTier::Budget);
        let filtered = apply(&items, &criteria);
        // Food Truck has no tier and must fail an active tier constraint
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Taqueria");
    }

    #[test]
    fn test_tags_and_tiers_are_anded() {
        let items = sample_items();
        let criteria = FilterCriteria::none()
            .with_tag("mexican")
            .with_tier(PriceTier::Budget);
        let filtered = apply(&items, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Taqueria");
    }

    #[test]
    fn test_filter_is_pure() {
        let items = sample_items();
        let criteria = FilterCriteria::none().with_tag("breakfast");
        let a: Vec<_> = apply(&items, &criteria).iter().map(|i| i.key.clone()).collect();
        let b: Vec<_> = apply(&items, &criteria).iter().map(|i| i.key.clone()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_apply_indices_matches_apply() {
        let items = sample_items();
        let criteria = FilterCriteria::none().with_tag("mexican");
        let indices = apply_indices(&items, &criteria);
        assert_eq!(indices, vec![0, 3]);
    }
}
