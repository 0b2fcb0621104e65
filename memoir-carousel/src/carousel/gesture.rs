//! Touch swipe detection and keyboard input

use crate::constants::gesture::SWIPE_THRESHOLD_PX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled right-to-left: show the next entry.
    Forward,
    /// Finger travelled left-to-right: show the previous entry.
    Backward,
}

/// Tracks a single horizontal touch from start to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    current_x: f32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.current_x = x;
    }

    pub fn touch_move(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.current_x = x;
        }
    }

    /// Ends the touch. A travel of more than the threshold in either direction
    /// is a swipe; anything shorter is ignored.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let delta = start - self.current_x;
        if delta > SWIPE_THRESHOLD_PX {
            Some(SwipeDirection::Forward)
        } else if delta < -SWIPE_THRESHOLD_PX {
            Some(SwipeDirection::Backward)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Escape,
}
