//! Carousel constants
//!
//! Shared defaults for autoplay cadence, slide transitions, the responsive
//! breakpoint and touch gestures. Tuning should happen here (or through
//! [`crate::config::CarouselConfig`]) so every carousel behaves consistently.

/// Autoplay cadence.
pub mod autoplay {
    /// Time between automatic advances (ms).
    pub const INTERVAL_MS: u64 = 5_000;
    /// Resolution at which the session driver feeds elapsed time into the
    /// autoplay clock (ms). Pausing and resuming is accurate to this grain.
    pub const RESOLUTION_MS: u64 = 100;
}

/// Slide transition defaults.
pub mod transition {
    /// Duration of the slide animation (ms).
    pub const DURATION_MS: u64 = 500;
}

/// Responsive layout.
pub mod layout {
    /// Viewports strictly narrower than this (logical px) are treated as
    /// mobile and get the grid/list view-mode selector.
    pub const MOBILE_BREAKPOINT: f32 = 768.0;
}

/// Touch gestures.
pub mod gesture {
    /// Minimum horizontal travel (logical px) for a touch to count as a swipe.
    pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
}

/// Timeline axis.
pub mod timeline {
    /// Full scale of the scrub position.
    pub const POSITION_MAX: f32 = 100.0;
    /// Scrub position used when every entry shares one year.
    pub const DEGENERATE_POSITION: f32 = 0.0;
}

/// Image preloading.
pub mod preload {
    /// Per-image probe timeout (ms).
    pub const TIMEOUT_MS: u64 = 10_000;
}
