//! Easing curves for the landing animation
//!
//! All curves are monotonic on [0, 1]. The spin uses a single continuous
//! ease-out curve from launch to landing; segmented or overshooting curves
//! would produce visible speed discontinuities on the reel.

use serde::{Deserialize, Serialize};

/// Easing curve type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Easing {
    /// No easing
    Linear,
    /// Quadratic ease-out (gentle stop)
    EaseOutQuad,
    /// Cubic ease-out (the classic slot deceleration)
    #[default]
    EaseOutCubic,
    /// Quintic ease-out (long tail, dramatic stop)
    EaseOutQuint,
}

impl Easing {
    /// Apply the curve to a linear progress value (0.0-1.0)
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseOutQuint => 1.0 - (1.0 - t).powi(5),
        }
    }
}
