//! Autoplay state machine and its pausable clock
//!
//! ```text
//!            manual navigation (any)
//!  Autoplay ─────────────────────────► Manual   (absorbing)
//!     │  ▲                                │  ▲
//!  hover/drag  leave/release       hover/drag  leave/release
//!     ▼  │                                ▼  │
//!  Suspended{resume_to: Autoplay}   Suspended{resume_to: Manual}
//! ```
//!
//! Suspension pauses the clock without resetting it: the time already spent
//! towards the next advance is kept until the pointer leaves.

use std::time::Duration;

/// Whether idle time advances the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayMode {
    #[default]
    Autoplay,
    /// Entered on the first manual navigation and never left while mounted.
    Manual,
}

/// Transient conditions that pause autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Suspension {
    pub hovered: bool,
    pub dragging: bool,
}

impl Suspension {
    pub fn is_active(&self) -> bool {
        self.hovered || self.dragging
    }
}

/// Observable autoplay state, derived from mode and suspension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayPhase {
    Autoplay,
    Manual,
    Suspended { resume_to: AutoplayMode },
}

impl AutoplayPhase {
    pub fn derive(mode: AutoplayMode, suspension: Suspension) -> Self {
        if suspension.is_active() {
            return AutoplayPhase::Suspended { resume_to: mode };
        }
        match mode {
            AutoplayMode::Autoplay => AutoplayPhase::Autoplay,
            AutoplayMode::Manual => AutoplayPhase::Manual,
        }
    }

    /// True when idle time should count towards the next advance.
    pub fn is_running(&self) -> bool {
        matches!(self, AutoplayPhase::Autoplay)
    }
}

/// Accumulates running time and reports how many intervals elapsed.
#[derive(Debug, Clone)]
pub struct AutoplayClock {
    interval: Duration,
    elapsed: Duration,
}

impl AutoplayClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Time left until the next advance.
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.elapsed)
    }

    /// Adds `dt` of running time. Returns the number of advances due.
    pub fn advance(&mut self, dt: Duration) -> usize {
        self.elapsed += dt;
        let mut fires = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fires += 1;
        }
        fires
    }

    /// Restart the countdown, e.g. after the slide changed for another reason.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

impl Default for AutoplayClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::constants::autoplay::INTERVAL_MS,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspension_wraps_the_underlying_mode() {
        let hovered = Suspension {
            hovered: true,
            dragging: false,
        };
        assert_eq!(
            AutoplayPhase::derive(AutoplayMode::Autoplay, hovered),
            AutoplayPhase::Suspended {
                resume_to: AutoplayMode::Autoplay
            }
        );
        assert_eq!(
            AutoplayPhase::derive(AutoplayMode::Manual, Suspension::default()),
            AutoplayPhase::Manual
        );
        assert!(
            AutoplayPhase::derive(AutoplayMode::Autoplay, Suspension::default())
                .is_running()
        );
    }

    #[test]
    fn clock_fires_once_per_interval() {
        let mut clock = AutoplayClock::new(Duration::from_secs(5));
        assert_eq!(clock.advance(Duration::from_millis(4_900)), 0);
        assert_eq!(clock.remaining(), Duration::from_millis(100));
        assert_eq!(clock.advance(Duration::from_millis(100)), 1);
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.advance(Duration::from_secs(11)), 2);
        assert_eq!(clock.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut clock = AutoplayClock::new(Duration::ZERO);
        assert_eq!(clock.interval(), Duration::from_millis(1));
        assert_eq!(clock.advance(Duration::from_millis(3)), 3);
    }
}
