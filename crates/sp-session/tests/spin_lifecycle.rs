//! Spin Lifecycle Test Suite
//!
//! End-to-end coverage of the coordinator over real catalogs:
//! - Landing correctness through the full lifecycle
//! - Repeated sessions staying in the home zone
//! - Ad cadence across a session
//! - Filter edits between spins
//! - Refusal semantics on empty datasets

use std::time::Duration;

use sp_core::{CatalogItem, CustomItem, FilterCriteria, PriceTier, ReelItem, StoreItem};
use sp_reel::TimingConfig;
use sp_session::{AdGateConfig, IntervalAdGate, NoAdGate, SpinCoordinator, SpinPhase};

fn catalog(n: usize) -> Vec<CatalogItem> {
    (0..n)
        .map(|i| {
            if i % 4 == 3 {
                CatalogItem::Custom(CustomItem::new(format!("c{i}"), format!("Custom {i}")))
            } else {
                CatalogItem::Store(
                    StoreItem::new(format!("s{i}"), format!("Store {i}"))
                        .with_tag(if i % 2 == 0 { "even" } else { "odd" })
                        .with_tier(if i % 3 == 0 {
                            PriceTier::Budget
                        } else {
                            PriceTier::Premium
                        }),
                )
            }
        })
        .collect()
}

fn coordinator(n: usize, seed: u64) -> SpinCoordinator<CatalogItem, NoAdGate> {
    let mut c = SpinCoordinator::new(NoAdGate);
    c.set_timing(TimingConfig::instant());
    c.seed(seed);
    c.set_items(catalog(n));
    c
}

#[tokio::test]
async fn landed_item_matches_reported_index() {
    for n in [1usize, 2, 5, 50, 500, 1000] {
        let mut c = coordinator(n, 0xBEEF ^ n as u64);
        let outcome = c.spin().await.expect("spin should complete");
        let filtered = c.filtered_items();
        assert_eq!(
            filtered[outcome.filtered_index].key(),
            outcome.item.key(),
            "n={n}"
        );
    }
}

#[tokio::test]
async fn repeated_sessions_stay_in_the_home_zone() {
    let mut c = coordinator(120, 2024);
    let plan = *c.plan().unwrap();
    let (home_start, home_end) = plan.home_zone();

    for _ in 0..50 {
        let outcome = c.spin().await.unwrap();
        assert!(outcome.filtered_index < 120);
        assert_eq!(c.phase(), SpinPhase::Idle);
        let slot = c.scroll_position().round() as usize;
        assert!(slot >= home_start && slot < home_end, "drifted to {slot}");
    }
    assert_eq!(c.stats().total_spins, 50);
}

#[tokio::test]
async fn ad_cadence_over_a_session() {
    let gate = IntervalAdGate::new(AdGateConfig {
        min_spins_between_ads: 3,
        min_interval: Duration::ZERO,
    });
    let mut c: SpinCoordinator<CatalogItem, IntervalAdGate> = SpinCoordinator::new(gate);
    c.set_timing(TimingConfig::instant());
    c.seed(5);
    c.set_items(catalog(12));

    let mut pattern = Vec::new();
    for _ in 0..8 {
        pattern.push(c.spin().await.unwrap().ad_shown);
    }
    // First ad once three spins have completed; the gated spin itself
    // counts toward the next window, so ads land on spins 4 and 7
    assert_eq!(
        pattern,
        [false, false, false, true, false, false, true, false]
    );
    assert_eq!(c.stats().ads_shown, 2);
}

#[tokio::test]
async fn filter_edits_apply_to_the_next_spin() {
    let mut c = coordinator(20, 31);
    c.spin().await.unwrap();

    c.set_criteria(FilterCriteria::none().with_tier(PriceTier::Budget));
    let budget_count = c.filtered_len();
    assert!(budget_count > 0 && budget_count < 20);

    let outcome = c.spin().await.unwrap();
    assert_eq!(outcome.item.tier(), Some(PriceTier::Budget));
    assert!(outcome.filtered_index < budget_count);
}

#[tokio::test]
async fn empty_filter_refuses_then_recovers() {
    let mut c = coordinator(6, 1);
    c.set_criteria(FilterCriteria::none().with_tag("missing"));
    assert!(!c.can_spin());
    assert!(c.spin().await.is_none());

    c.set_criteria(FilterCriteria::none());
    assert!(c.can_spin());
    assert!(c.spin().await.is_some());
    assert_eq!(c.stats().refused, 1);
    assert_eq!(c.stats().total_spins, 1);
}

#[tokio::test]
async fn timed_spin_settles_with_real_clock() {
    // One short real-time animation to exercise the frame loop
    let mut c = coordinator(10, 77);
    c.set_timing(TimingConfig {
        spin_duration_ms: 60.0,
        settle_delay_ms: 10.0,
        ..TimingConfig::turbo()
    });

    let outcome = c.spin().await.expect("timed spin should land");
    assert!(outcome.elapsed_ms >= 60.0);
    assert_eq!(c.phase(), SpinPhase::Idle);
}
