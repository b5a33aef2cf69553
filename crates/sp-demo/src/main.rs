//! SpinPick Demo
//!
//! Usage:
//!   sp-demo                          - 3 spins over the sample catalog
//!   sp-demo --spins 10 --tag food    - filtered spins
//!   sp-demo --tier budget --turbo    - tier filter, fast animation
//!   sp-demo --ads --seed 7           - ad-gated, reproducible

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use sp_core::{
    ActivityItem, CatalogItem, CustomItem, FilterCriteria, PriceTier, ReelItem, StoreItem,
};
use sp_reel::TimingConfig;
use sp_session::{AdGateConfig, IntervalAdGate, NoAdGate, SpinCoordinator};

#[derive(Parser)]
#[command(name = "sp-demo", about = "Spin a SpinPick reel over a sample catalog")]
struct Cli {
    /// Number of spins to run
    #[arg(short, long, default_value_t = 3)]
    spins: u32,

    /// Load the catalog from a JSON file instead of the built-in sample
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Keep only items carrying this tag
    #[arg(long)]
    tag: Option<String>,

    /// Keep only items in this price tier (budget, standard, premium)
    #[arg(long)]
    tier: Option<String>,

    /// Fast animation
    #[arg(long)]
    turbo: bool,

    /// Skip the animation entirely
    #[arg(long)]
    instant: bool,

    /// Gate spins behind a rate-limited interstitial
    #[arg(long)]
    ads: bool,

    /// Seed the RNG for reproducible results
    #[arg(long)]
    seed: Option<u64>,
}

fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::Store(
            StoreItem::new("store-taqueria", "La Taqueria")
                .with_address("2889 Mission St")
                .with_tag("food")
                .with_tag("mexican")
                .with_tier(PriceTier::Budget),
        ),
        CatalogItem::Store(
            StoreItem::new("store-bistro", "Chez Navarre")
                .with_address("14 Rue Fictive")
                .with_tag("food")
                .with_tag("french")
                .with_tier(PriceTier::Premium),
        ),
        CatalogItem::Store(
            StoreItem::new("store-ramen", "Menya Hiro")
                .with_address("52 5th Ave")
                .with_tag("food")
                .with_tag("japanese")
                .with_tier(PriceTier::Standard),
        ),
        CatalogItem::Activity(
            ActivityItem::new("act-bowling", "Bowling")
                .with_description("Ten frames, loser buys dessert")
                .with_tag("indoor")
                .with_tier(PriceTier::Standard),
        ),
        CatalogItem::Activity(
            ActivityItem::new("act-hike", "Ridge Trail Hike")
                .with_description("6km loop, bring water")
                .with_tag("outdoor")
                .with_tier(PriceTier::Budget),
        ),
        CatalogItem::Activity(
            ActivityItem::new("act-museum", "Science Museum")
                .with_tag("indoor")
                .with_tier(PriceTier::Standard),
        ),
        CatalogItem::Custom(CustomItem::new("custom-home", "Stay in and cook")),
        CatalogItem::Custom(CustomItem::new("custom-coin", "Let the next person decide")),
    ]
}

fn parse_tier(s: &str) -> Option<PriceTier> {
    match s.to_ascii_lowercase().as_str() {
        "budget" => Some(PriceTier::Budget),
        "standard" => Some(PriceTier::Standard),
        "premium" => Some(PriceTier::Premium),
        _ => None,
    }
}

async fn run_spins<G: sp_session::AdGate>(
    coordinator: &mut SpinCoordinator<CatalogItem, G>,
    spins: u32,
) {
    for _ in 0..spins {
        match coordinator.spin().await {
            Some(outcome) => {
                let ad = if outcome.ad_shown { " [ad]" } else { "" };
                println!(
                    "{}: {}{}{}",
                    outcome.spin_id,
                    outcome.item.label(),
                    outcome
                        .item
                        .sublabel()
                        .map(|s| format!(" — {s}"))
                        .unwrap_or_default(),
                    ad
                );
            }
            None => {
                println!("spin refused (empty filtered set?)");
                return;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => sp_core::load_catalog(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => sample_catalog(),
    };

    let mut criteria = FilterCriteria::none();
    if let Some(tag) = &cli.tag {
        criteria = criteria.with_tag(tag.clone());
    }
    if let Some(tier) = cli.tier.as_deref().and_then(parse_tier) {
        criteria = criteria.with_tier(tier);
    }

    let timing = if cli.instant {
        TimingConfig::instant()
    } else if cli.turbo {
        TimingConfig::turbo()
    } else {
        TimingConfig::normal()
    };

    // Two coordinator shapes because the gate is a type parameter; both
    // paths share the setup and spin loop.
    if cli.ads {
        let gate = IntervalAdGate::new(AdGateConfig {
            min_spins_between_ads: 2,
            min_interval: std::time::Duration::ZERO,
        });
        let mut coordinator = SpinCoordinator::new(gate);
        configure(&mut coordinator, &cli, catalog, criteria, timing);
        run_spins(&mut coordinator, cli.spins).await;
        info!("session stats: {:?}", coordinator.stats());
    } else {
        let mut coordinator = SpinCoordinator::new(NoAdGate);
        configure(&mut coordinator, &cli, catalog, criteria, timing);
        run_spins(&mut coordinator, cli.spins).await;
        info!("session stats: {:?}", coordinator.stats());
    }
    Ok(())
}

fn configure<G: sp_session::AdGate>(
    coordinator: &mut SpinCoordinator<CatalogItem, G>,
    cli: &Cli,
    catalog: Vec<CatalogItem>,
    criteria: FilterCriteria,
    timing: TimingConfig,
) {
    coordinator.set_timing(timing);
    if let Some(seed) = cli.seed {
        coordinator.seed(seed);
    }
    coordinator.set_items(catalog);
    coordinator.set_criteria(criteria);
    info!(
        "catalog loaded: {} items pass the filter",
        coordinator.filtered_len()
    );
}
