//! Carousel: the chronological slideshow state machine
//!
//! `current_index` always addresses the sorted sequence and wraps at both ends.
//! The scrub position is derived from it while [`ScrubState::Settled`]; while
//! [`ScrubState::Dragging`] the relationship flips and the index is derived
//! from the drag position instead.

use std::time::{Duration, Instant};

use memoir_model::{Entry, EntryId, RemediationOutcome};

use super::autoplay::{AutoplayClock, AutoplayMode, AutoplayPhase, Suspension};
use super::collection::EntryCollection;
use super::gesture::{Key, SwipeDirection, SwipeTracker};
use super::timeline::{TimelineAxis, TimelineTick};
use super::transition::{Direction, SlideTransition};
use super::viewport::{ViewMode, Viewport};
use crate::capabilities::viewer::{FullScreenViewer, ViewerRecord};
use crate::config::CarouselConfig;
use crate::constants;
use crate::error::{CarouselError, Result};
use crate::preload::PreloadReport;

/// Relationship between the scrubber and the current index.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrubState {
    /// Position follows the index.
    #[default]
    Settled,
    /// Index follows the position under the pointer.
    Dragging { position: f32 },
}

/// Progress of the mount-time image preload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Settled { loaded: usize, failed: usize },
}

#[derive(Debug, Clone)]
pub struct Carousel {
    collection: EntryCollection,
    axis: TimelineAxis,
    years: Vec<i32>,

    current_index: usize,
    direction: Direction,

    mode: AutoplayMode,
    suspension: Suspension,
    clock: AutoplayClock,

    scrub: ScrubState,
    view_mode: ViewMode,
    viewport: Viewport,
    swipe: SwipeTracker,
    transition: SlideTransition,

    load_state: LoadState,
    full_view: Option<EntryId>,
}

impl Carousel {
    /// Mount a carousel over `entries` with default tuning.
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        Self::with_config(entries, &CarouselConfig::default())
    }

    pub fn with_config(
        entries: Vec<Entry>,
        config: &CarouselConfig,
    ) -> Result<Self> {
        config.validate()?;
        let collection = EntryCollection::new(entries)?;
        let years = collection.years();
        let axis = TimelineAxis::from_years(&years)
            .ok_or(CarouselError::EmptyCollection)?;

        log::info!(
            "Carousel mounted: {} entries spanning {}..={}",
            collection.len(),
            axis.min_year,
            axis.max_year
        );

        Ok(Self {
            collection,
            axis,
            years,
            current_index: 0,
            direction: Direction::Forward,
            mode: AutoplayMode::Autoplay,
            suspension: Suspension::default(),
            clock: AutoplayClock::new(config.autoplay_interval()),
            scrub: ScrubState::Settled,
            view_mode: ViewMode::Carousel,
            viewport: Viewport::new(config.mobile_breakpoint),
            swipe: SwipeTracker::new(),
            transition: SlideTransition::new(
                config.transition_duration(),
                config.transition_easing,
            ),
            load_state: LoadState::Loading,
            full_view: None,
        })
    }

    // ----- Accessors -------------------------------------------------------

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn collection(&self) -> &EntryCollection {
        &self.collection
    }

    pub fn axis(&self) -> TimelineAxis {
        self.axis
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_entry(&self) -> Option<&Entry> {
        self.collection.get(self.current_index)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn autoplay_mode(&self) -> AutoplayMode {
        self.mode
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.mode == AutoplayMode::Autoplay
    }

    pub fn phase(&self) -> AutoplayPhase {
        AutoplayPhase::derive(self.mode, self.suspension)
    }

    pub fn clock(&self) -> &AutoplayClock {
        &self.clock
    }

    pub fn scrub_state(&self) -> ScrubState {
        self.scrub
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.scrub, ScrubState::Dragging { .. })
    }

    pub fn is_hovered(&self) -> bool {
        self.suspension.hovered
    }

    /// Scrubber position in `0.0..=100.0`.
    pub fn scrub_position(&self) -> f32 {
        match self.scrub {
            ScrubState::Dragging { position } => position,
            ScrubState::Settled => self.position_for_index(self.current_index),
        }
    }

    /// Axis position of the entry at sorted `index`.
    pub fn position_for_index(&self, index: usize) -> f32 {
        self.years
            .get(index)
            .map(|year| self.axis.position_for_year(*year))
            .unwrap_or(constants::timeline::DEGENERATE_POSITION)
    }

    /// Sorted index selected by a scrub at `position`.
    pub fn index_for_position(&self, position: f32) -> usize {
        self.axis.nearest_index(position, &self.years)
    }

    pub fn ticks(&self) -> Vec<TimelineTick> {
        self.axis.ticks(&self.years)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The presentation actually on screen for the current viewport.
    pub fn presentation(&self) -> ViewMode {
        self.viewport.effective_mode(self.view_mode)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile()
    }

    pub fn transition(&self) -> &SlideTransition {
        &self.transition
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Entry currently handed to the full-screen viewer.
    pub fn full_view(&self) -> Option<&Entry> {
        self.full_view.and_then(|id| self.collection.by_id(id))
    }

    pub fn is_full_view_open(&self) -> bool {
        self.full_view.is_some()
    }

    // ----- Navigation ------------------------------------------------------

    /// Manual step forward, wrapping to the first entry.
    pub fn next(&mut self) {
        self.disable_autoplay("next");
        self.step_forward();
    }

    /// Manual step backward, wrapping to the last entry.
    pub fn previous(&mut self) {
        self.disable_autoplay("previous");
        let len = self.len();
        let target = (self.current_index + len - 1) % len;
        self.move_to(target, Direction::Backward);
    }

    /// Jump to the first entry of `year`. Returns false, and leaves autoplay
    /// untouched, when no entry carries that year.
    pub fn jump_to_year(&mut self, year: i32) -> bool {
        let Some(target) = self.collection.first_index_of_year(year) else {
            log::debug!("No entry for year {year}; jump ignored");
            return false;
        };
        self.disable_autoplay("jump to year");
        let direction = Direction::between(self.current_index, target);
        self.move_to(target, direction);
        true
    }

    /// Manual jump to sorted `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len() {
            log::debug!("Index {index} out of range (len {})", self.len());
            return false;
        }
        self.disable_autoplay("go to");
        let direction = Direction::between(self.current_index, index);
        self.move_to(index, direction);
        true
    }

    /// Pick an entry from the grid or list and return to the card view.
    pub fn select_from_overview(&mut self, index: usize) -> bool {
        if !self.go_to(index) {
            return false;
        }
        self.view_mode = ViewMode::Carousel;
        true
    }

    fn step_forward(&mut self) {
        let target = (self.current_index + 1) % self.len();
        self.move_to(target, Direction::Forward);
    }

    fn move_to(&mut self, target: usize, direction: Direction) {
        self.direction = direction;
        if target == self.current_index {
            return;
        }
        log::debug!(
            "Carousel {} -> {} ({:?})",
            self.current_index,
            target,
            direction
        );
        self.transition
            .start(self.current_index, target, direction, Instant::now());
        self.current_index = target;
    }

    fn disable_autoplay(&mut self, cause: &str) {
        if self.mode == AutoplayMode::Autoplay {
            log::info!("Autoplay disabled by {cause}");
            self.mode = AutoplayMode::Manual;
            self.clock.reset();
        }
    }

    // ----- Scrubbing -------------------------------------------------------

    /// Pointer down on the timeline.
    pub fn begin_scrub(&mut self, position: f32) {
        self.suspension.dragging = true;
        self.scrub = ScrubState::Dragging {
            position: clamp_position(position),
        };
        self.follow_scrub();
    }

    /// Pointer moved while dragging. Ignored when no drag is in progress.
    pub fn scrub(&mut self, position: f32) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.scrub = ScrubState::Dragging {
            position: clamp_position(position),
        };
        self.follow_scrub();
        true
    }

    /// Pointer released: the position snaps back to the selected entry and
    /// autoplay stays off for the rest of the session.
    pub fn end_scrub(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.scrub = ScrubState::Settled;
        self.suspension.dragging = false;
        self.disable_autoplay("scrub");
        true
    }

    fn follow_scrub(&mut self) {
        if let ScrubState::Dragging { position } = self.scrub {
            let target = self.index_for_position(position);
            let direction = Direction::between(self.current_index, target);
            self.move_to(target, direction);
        }
    }

    // ----- Autoplay --------------------------------------------------------

    /// One autoplay advance. The only forward step that keeps autoplay on.
    pub fn autoplay_tick(&mut self) -> bool {
        if !self.phase().is_running() {
            return false;
        }
        self.step_forward();
        true
    }

    /// Feed running time into the autoplay clock. Returns advances fired.
    /// Time is not counted while suspended or after autoplay was disabled.
    pub fn advance_clock(&mut self, dt: Duration) -> usize {
        if !self.phase().is_running() {
            return 0;
        }
        let fires = self.clock.advance(dt);
        for _ in 0..fires {
            self.autoplay_tick();
        }
        fires
    }

    pub fn pointer_enter(&mut self) {
        self.suspension.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.suspension.hovered = false;
    }

    // ----- Touch, keyboard and viewport ------------------------------------

    fn swipe_enabled(&self) -> bool {
        self.viewport.is_mobile() && self.presentation() == ViewMode::Carousel
    }

    pub fn touch_start(&mut self, x: f32) {
        if self.swipe_enabled() {
            self.swipe.touch_start(x);
        }
    }

    pub fn touch_move(&mut self, x: f32) {
        self.swipe.touch_move(x);
    }

    /// Ends a touch; a swipe navigates like the arrow buttons.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let swipe = self.swipe.touch_end()?;
        if !self.swipe_enabled() {
            return None;
        }
        match swipe {
            SwipeDirection::Forward => self.next(),
            SwipeDirection::Backward => self.previous(),
        }
        Some(swipe)
    }

    /// Keyboard input. Arrows drive the viewer while it is open.
    pub fn key<V: FullScreenViewer + ?Sized>(&mut self, key: Key, viewer: &mut V) {
        if self.is_full_view_open() {
            match key {
                Key::ArrowLeft => self.viewer_previous(viewer),
                Key::ArrowRight => self.viewer_next(viewer),
                Key::Escape => self.close_full_view(viewer),
                Key::Home | Key::End => {}
            }
            return;
        }
        match key {
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            Key::Home => {
                self.go_to(0);
            }
            Key::End => {
                self.go_to(self.len() - 1);
            }
            Key::Escape => {}
        }
    }

    pub fn resize(&mut self, width: f32) {
        if self.viewport.resize(width) {
            log::debug!(
                "Viewport {width}px: mobile={}",
                self.viewport.is_mobile()
            );
            if !self.viewport.is_mobile() {
                self.swipe.cancel();
            }
        }
    }

    /// Choose a presentation. Kept across navigation and breakpoint changes.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if self.view_mode == mode {
            return false;
        }
        self.view_mode = mode;
        true
    }

    // ----- Media -----------------------------------------------------------

    /// An image failed to load: try the one-shot extension rewrite on the
    /// entry with `id`.
    pub fn image_failed(&mut self, id: EntryId) -> Option<RemediationOutcome> {
        let outcome = self.collection.remediate_image(id);
        match &outcome {
            Some(RemediationOutcome::Rewritten { from, to }) => {
                log::warn!("Image for {id} failed; retrying {from} as {to}");
            }
            Some(RemediationOutcome::AlreadyAttempted) => {
                log::debug!("Image for {id} still failing after rewrite");
            }
            Some(RemediationOutcome::NoRule) => {
                log::debug!("Image for {id} failed; no rewrite rule applies");
            }
            None => log::debug!("Image failure for unknown entry {id}"),
        }
        outcome
    }

    /// Image references in display order, for preloading.
    pub fn images(&self) -> Vec<(EntryId, memoir_model::ImageRef)> {
        self.collection
            .iter()
            .map(|entry| (entry.id, entry.image.clone()))
            .collect()
    }

    pub fn preload_started(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// All preload attempts settled. Failed images get their rewrite.
    pub fn preload_finished(&mut self, report: &PreloadReport) {
        for id in &report.failed {
            self.image_failed(*id);
        }
        self.load_state = LoadState::Settled {
            loaded: report.loaded.len(),
            failed: report.failed.len(),
        };
    }

    // ----- Full-screen viewer ----------------------------------------------

    /// Open the current entry in the viewer. Only the card presentation
    /// opens the viewer on click.
    pub fn open_full_view<V: FullScreenViewer + ?Sized>(
        &mut self,
        viewer: &mut V,
    ) -> bool {
        if self.presentation() != ViewMode::Carousel {
            return false;
        }
        let Some(id) = self.collection.id_at(self.current_index) else {
            return false;
        };
        self.show_in_viewer(id, viewer);
        true
    }

    /// Viewer "next": walks the sorted sequence from the viewed entry without
    /// touching the carousel index or autoplay.
    pub fn viewer_next<V: FullScreenViewer + ?Sized>(&mut self, viewer: &mut V) {
        self.step_viewer(1, viewer);
    }

    pub fn viewer_previous<V: FullScreenViewer + ?Sized>(
        &mut self,
        viewer: &mut V,
    ) {
        self.step_viewer(self.len() - 1, viewer);
    }

    pub fn close_full_view<V: FullScreenViewer + ?Sized>(
        &mut self,
        viewer: &mut V,
    ) {
        if self.full_view.take().is_some() {
            viewer.close();
        }
    }

    fn step_viewer<V: FullScreenViewer + ?Sized>(
        &mut self,
        offset: usize,
        viewer: &mut V,
    ) {
        let Some(position) =
            self.full_view.and_then(|id| self.collection.position_of(id))
        else {
            return;
        };
        let target = (position + offset) % self.len();
        if let Some(id) = self.collection.id_at(target) {
            self.show_in_viewer(id, viewer);
        }
    }

    fn show_in_viewer<V: FullScreenViewer + ?Sized>(
        &mut self,
        id: EntryId,
        viewer: &mut V,
    ) {
        if let Some(entry) = self.collection.by_id(id) {
            viewer.open(&ViewerRecord::from(entry));
            self.full_view = Some(id);
        }
    }
}

fn clamp_position(position: f32) -> f32 {
    if position.is_finite() {
        position.clamp(0.0, constants::timeline::POSITION_MAX)
    } else {
        0.0
    }
}
