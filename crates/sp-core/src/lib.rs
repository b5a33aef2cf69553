//! # sp-core — SpinPick Core Model
//!
//! Shared building blocks for the SpinPick decision engine:
//!
//! - **Items**: one polymorphic `ReelItem` capability (label, secondary
//!   label, filter tags, price tier) implemented per catalog variant
//! - **Filtering**: pure, order-preserving criteria evaluation
//! - **Errors**: `SpError` / `SpResult` shared across the workspace
//!
//! The reel and session crates never branch on item kind; they only see
//! the `ReelItem` trait and indices into a filtered snapshot.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod item;

pub use catalog::*;
pub use error::*;
pub use filter::*;
pub use item::*;
