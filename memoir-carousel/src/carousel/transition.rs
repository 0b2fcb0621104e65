//! Time-based slide transition tracker
//!
//! There is no transition queue: starting a transition while another is in
//! flight replaces it, so the latest navigation always wins.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Sign of the most recent slide change. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Direction of travel from `from` to `to` in the sorted sequence.
    pub fn between(from: usize, to: usize) -> Self {
        if to < from {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// Horizontal sign for slide-in offsets.
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Progress curve of a slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Quadratic ease-out: fast start, gentle landing.
    #[default]
    EaseOut,
}

impl Easing {
    /// Maps linear progress `t` in `0.0..=1.0` onto the curve.
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseOut => t * (2.0 - t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveTransition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct SlideTransition {
    active: Option<ActiveTransition>,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Default for SlideTransition {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(crate::constants::transition::DURATION_MS),
            Easing::default(),
        )
    }
}

impl SlideTransition {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            active: None,
            started_at: Instant::now(),
            duration,
            easing,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveTransition> {
        self.active.as_ref()
    }

    /// Begin a transition, discarding whatever was in flight.
    pub fn start(
        &mut self,
        from: usize,
        to: usize,
        direction: Direction,
        now: Instant,
    ) {
        if let Some(previous) = self.active.take() {
            log::trace!(
                "Slide transition {}->{} superseded by {}->{}",
                previous.from,
                previous.to,
                from,
                to
            );
        }
        self.active = Some(ActiveTransition {
            from,
            to,
            direction,
        });
        self.started_at = now;
    }

    /// Eased progress in `0.0..=1.0`, or `None` when idle. Finishes the
    /// transition once the duration has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.active?;
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = None;
            return Some(1.0);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        Some(self.easing.apply(t))
    }

    /// Cancel the current transition immediately.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
