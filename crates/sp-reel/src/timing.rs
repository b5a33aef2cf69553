//! Timing profiles for the spin lifecycle

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Timing profile for spins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimingProfile {
    /// Normal gameplay timing
    Normal,
    /// Fast mode
    Turbo,
    /// Zero-duration (tests, headless hosts)
    Instant,
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self::Normal
    }
}

/// Detailed timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Profile type
    pub profile: TimingProfile,
    /// Full spin animation duration (ms)
    pub spin_duration_ms: f64,
    /// Pause between landing and result delivery (ms)
    pub settle_delay_ms: f64,
    /// Frame interval for driving the animation (ms)
    pub frame_interval_ms: f64,
    /// Deceleration curve
    pub easing: Easing,
}

impl TimingConfig {
    /// Normal gameplay timing
    pub fn normal() -> Self {
        Self {
            profile: TimingProfile::Normal,
            spin_duration_ms: 3000.0,
            settle_delay_ms: 150.0,
            frame_interval_ms: 16.0,
            easing: Easing::EaseOutCubic,
        }
    }

    /// Turbo mode
    pub fn turbo() -> Self {
        Self {
            profile: TimingProfile::Turbo,
            spin_duration_ms: 1200.0,
            settle_delay_ms: 75.0,
            frame_interval_ms: 16.0,
            easing: Easing::EaseOutCubic,
        }
    }

    /// Instant mode: the animation completes on the first tick and the
    /// settle delay is skipped. Used by tests and headless hosts.
    pub fn instant() -> Self {
        Self {
            profile: TimingProfile::Instant,
            spin_duration_ms: 0.0,
            settle_delay_ms: 0.0,
            frame_interval_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Get config for profile
    pub fn from_profile(profile: TimingProfile) -> Self {
        match profile {
            TimingProfile::Normal => Self::normal(),
            TimingProfile::Turbo => Self::turbo(),
            TimingProfile::Instant => Self::instant(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles() {
        let normal = TimingConfig::normal();
        let turbo = TimingConfig::turbo();
        let instant = TimingConfig::instant();

        assert!(turbo.spin_duration_ms < normal.spin_duration_ms);
        assert_eq!(instant.spin_duration_ms, 0.0);
        assert_eq!(instant.settle_delay_ms, 0.0);
    }

    #[test]
    fn test_from_profile() {
        assert_eq!(
            TimingConfig::from_profile(TimingProfile::Turbo),
            TimingConfig::turbo()
        );
    }
}
