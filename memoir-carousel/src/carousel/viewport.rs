//! Viewport width tracking and the narrow-screen view modes

use crate::constants::layout::MOBILE_BREAKPOINT;

/// Presentation of the entries. Only selectable on narrow viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ViewMode {
    /// Single-entry card with timeline scrubber.
    #[default]
    Carousel,
    /// Thumbnail grid.
    Grid,
    /// Compact thumbnail list with title and date.
    List,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] =
        [ViewMode::Carousel, ViewMode::Grid, ViewMode::List];

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Carousel => "Card",
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }

    pub fn is_overview(&self) -> bool {
        !matches!(self, ViewMode::Carousel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: Option<f32>,
    breakpoint: f32,
    is_mobile: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT)
    }
}

impl Viewport {
    /// Unmeasured viewports are treated as wide.
    pub fn new(breakpoint: f32) -> Self {
        Self {
            width: None,
            breakpoint,
            is_mobile: false,
        }
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Records a new width. Returns true when the mobile flag flipped.
    pub fn resize(&mut self, width: f32) -> bool {
        if !width.is_finite() || width < 0.0 {
            log::debug!("Ignoring invalid viewport width {width}");
            return false;
        }
        self.width = Some(width);
        let was_mobile = self.is_mobile;
        self.is_mobile = width < self.breakpoint;
        was_mobile != self.is_mobile
    }

    /// The presentation actually shown: wide viewports always get the card.
    pub fn effective_mode(&self, selected: ViewMode) -> ViewMode {
        if self.is_mobile {
            selected
        } else {
            ViewMode::Carousel
        }
    }
}
