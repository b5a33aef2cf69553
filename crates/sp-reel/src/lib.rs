//! # sp-reel — Virtualized Reel Engine
//!
//! The slot-machine half of SpinPick: plans a bounded, circularly-repeating
//! slot array over a filtered item list and drives the landing animation.
//!
//! ## Architecture
//!
//! ```text
//! item count ──> ReelPlan (repetition factor, total slots, base index)
//!                    │
//!                    v
//!              ReelAnimator ── begin_spin() picks the target up front,
//!                    │          computes forward-only travel
//!                    v
//!              tick(elapsed) ── single ease-out curve, atomic re-base
//!                    │          on landing
//!                    v
//!              SpinProgress::Landed(target)
//! ```
//!
//! The target index is chosen before the animation starts and the curve is
//! constructed to land exactly on it; the reported outcome is never read
//! back from wherever the animation stopped.

pub mod animator;
pub mod easing;
pub mod plan;
pub mod timing;

pub use animator::*;
pub use easing::*;
pub use plan::*;
pub use timing::*;
