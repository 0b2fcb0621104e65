//! Message dispatch for the carousel

use memoir_model::EntryId;

use super::autoplay::AutoplayPhase;
use super::messages::CarouselMessage;
use super::state::{Carousel, LoadState};
use super::viewport::ViewMode;
use crate::capabilities::viewer::{FullScreenViewer, ViewerCommand};

/// Observable state used to report whether a message changed anything.
#[derive(Debug, Clone, PartialEq)]
struct Observed {
    index: usize,
    phase: AutoplayPhase,
    scrub_position: f32,
    view_mode: ViewMode,
    presentation: ViewMode,
    full_view: Option<EntryId>,
    load_state: LoadState,
    image: Option<String>,
}

impl Observed {
    fn of(carousel: &Carousel) -> Self {
        Self {
            index: carousel.current_index(),
            phase: carousel.phase(),
            scrub_position: carousel.scrub_position(),
            view_mode: carousel.view_mode(),
            presentation: carousel.presentation(),
            full_view: carousel.full_view().map(|entry| entry.id),
            load_state: carousel.load_state().clone(),
            image: carousel
                .current_entry()
                .map(|entry| entry.image.as_str().to_string()),
        }
    }
}

/// Applies `message` and reports whether observable state changed.
pub fn update<V>(
    carousel: &mut Carousel,
    message: CarouselMessage,
    viewer: &mut V,
) -> bool
where
    V: FullScreenViewer + ?Sized,
{
    log::trace!("{}", message.name());
    let before = Observed::of(carousel);

    match message {
        CarouselMessage::Next => carousel.next(),
        CarouselMessage::Previous => carousel.previous(),
        CarouselMessage::JumpToYear(year) => {
            carousel.jump_to_year(year);
        }
        CarouselMessage::GoTo(index) => {
            carousel.go_to(index);
        }
        CarouselMessage::SelectFromOverview(index) => {
            carousel.select_from_overview(index);
        }
        CarouselMessage::ScrubStarted(position) => {
            carousel.begin_scrub(position)
        }
        CarouselMessage::ScrubMoved(position) => {
            carousel.scrub(position);
        }
        CarouselMessage::ScrubReleased => {
            carousel.end_scrub();
        }
        CarouselMessage::AutoplayTick => {
            carousel.autoplay_tick();
        }
        CarouselMessage::ClockAdvanced(dt) => {
            carousel.advance_clock(dt);
        }
        CarouselMessage::PointerEntered => carousel.pointer_enter(),
        CarouselMessage::PointerLeft => carousel.pointer_leave(),
        CarouselMessage::TouchStarted(x) => carousel.touch_start(x),
        CarouselMessage::TouchMoved(x) => carousel.touch_move(x),
        CarouselMessage::TouchEnded => {
            carousel.touch_end();
        }
        CarouselMessage::KeyPressed(key) => carousel.key(key, viewer),
        CarouselMessage::Resized(width) => carousel.resize(width),
        CarouselMessage::ViewModeSelected(mode) => {
            carousel.set_view_mode(mode);
        }
        CarouselMessage::ImageFailed(id) => {
            carousel.image_failed(id);
        }
        CarouselMessage::OpenFullView => {
            carousel.open_full_view(viewer);
        }
        CarouselMessage::Viewer(command) => match command {
            ViewerCommand::Next => carousel.viewer_next(viewer),
            ViewerCommand::Previous => carousel.viewer_previous(viewer),
            ViewerCommand::Close => carousel.close_full_view(viewer),
        },
    }

    Observed::of(carousel) != before
}

impl Carousel {
    /// Convenience wrapper around [`update`].
    pub fn update<V>(&mut self, message: CarouselMessage, viewer: &mut V) -> bool
    where
        V: FullScreenViewer + ?Sized,
    {
        update(self, message, viewer)
    }
}
