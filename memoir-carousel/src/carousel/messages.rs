//! Input messages for the carousel

use std::time::Duration;

use memoir_model::EntryId;

use super::gesture::Key;
use super::viewport::ViewMode;
use crate::capabilities::viewer::ViewerCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselMessage {
    // Navigation
    Next,
    Previous,
    JumpToYear(i32),
    GoTo(usize),
    SelectFromOverview(usize),

    // Timeline scrubber
    ScrubStarted(f32),
    ScrubMoved(f32),
    ScrubReleased,

    // Autoplay
    AutoplayTick,
    ClockAdvanced(Duration),
    PointerEntered,
    PointerLeft,

    // Touch / keyboard / layout
    TouchStarted(f32),
    TouchMoved(f32),
    TouchEnded,
    KeyPressed(Key),
    Resized(f32),
    ViewModeSelected(ViewMode),

    // Media
    ImageFailed(EntryId),

    // Full-screen viewer
    OpenFullView,
    Viewer(ViewerCommand),
}

impl CarouselMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "Carousel::Next",
            Self::Previous => "Carousel::Previous",
            Self::JumpToYear(_) => "Carousel::JumpToYear",
            Self::GoTo(_) => "Carousel::GoTo",
            Self::SelectFromOverview(_) => "Carousel::SelectFromOverview",
            Self::ScrubStarted(_) => "Carousel::ScrubStarted",
            Self::ScrubMoved(_) => "Carousel::ScrubMoved",
            Self::ScrubReleased => "Carousel::ScrubReleased",
            Self::AutoplayTick => "Carousel::AutoplayTick",
            Self::ClockAdvanced(_) => "Carousel::ClockAdvanced",
            Self::PointerEntered => "Carousel::PointerEntered",
            Self::PointerLeft => "Carousel::PointerLeft",
            Self::TouchStarted(_) => "Carousel::TouchStarted",
            Self::TouchMoved(_) => "Carousel::TouchMoved",
            Self::TouchEnded => "Carousel::TouchEnded",
            Self::KeyPressed(_) => "Carousel::KeyPressed",
            Self::Resized(_) => "Carousel::Resized",
            Self::ViewModeSelected(_) => "Carousel::ViewModeSelected",
            Self::ImageFailed(_) => "Carousel::ImageFailed",
            Self::OpenFullView => "Carousel::OpenFullView",
            Self::Viewer(_) => "Carousel::Viewer",
        }
    }
}
