//! # sp-session — Spin Lifecycle Coordination
//!
//! Drives one spin from request to result through an explicit state
//! machine:
//!
//! ```text
//! Idle ──spin()──> Gating ──gate resolves──> Animating ──landed──> Settling ──> Idle
//! ```
//!
//! The ad-gate consultation is the only genuinely asynchronous boundary;
//! it is bounded by a timeout and its failures are absorbed as "no ad".
//! The filtered item set is snapshotted at spin start, so a spin always
//! resolves to an item from the set that was current when it began.

pub mod coordinator;
pub mod gate;
pub mod session;

pub use coordinator::*;
pub use gate::*;
pub use session::*;
