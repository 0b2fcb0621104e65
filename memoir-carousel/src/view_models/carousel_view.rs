//! ViewModel for the chronological carousel
//!
//! A `CarouselView` is everything a toolkit needs to draw one frame: the card,
//! the timeline, the overview thumbnails and the control icons. It is rebuilt
//! from the [`Carousel`] after every update and carries no state of its own.

use crate::capabilities::icons::{Icon, IconProps, IconRenderer, render_icon};
use crate::capabilities::viewer::ViewerRecord;
use crate::carousel::{Carousel, Direction, ViewMode};

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub record: ViewerRecord,
    pub index: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickView {
    pub year: i32,
    pub position: f32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewItem {
    pub index: usize,
    pub record: ViewerRecord,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModeOption<O> {
    pub mode: ViewMode,
    pub label: &'static str,
    pub selected: bool,
    pub icon: Option<O>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Controls<O> {
    pub previous: Option<O>,
    pub next: Option<O>,
    pub calendar: Option<O>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView<O> {
    pub presentation: ViewMode,
    pub card: Option<CardView>,
    pub direction: Direction,
    pub scrub_position: f32,
    pub ticks: Vec<TickView>,
    /// Only populated on narrow viewports.
    pub view_modes: Vec<ViewModeOption<O>>,
    /// Grid or list thumbnails; empty in the card presentation.
    pub overview: Vec<OverviewItem>,
    pub controls: Controls<O>,
    pub is_loading: bool,
    pub autoplay_enabled: bool,
}

impl<O> CarouselView<O> {
    pub fn build<R>(carousel: &Carousel, icons: &R) -> Self
    where
        R: IconRenderer<Output = O> + ?Sized,
    {
        let presentation = carousel.presentation();
        let current = carousel.current_index();
        let props = IconProps::default();

        let card = carousel.current_entry().map(|entry| CardView {
            record: ViewerRecord::from(entry),
            index: current,
            total: carousel.len(),
        });

        let current_year = carousel.current_entry().map(|entry| entry.year);
        let ticks = carousel
            .ticks()
            .into_iter()
            .map(|tick| TickView {
                year: tick.year,
                position: tick.position,
                active: Some(tick.year) == current_year,
            })
            .collect();

        let view_modes = if carousel.is_mobile() {
            ViewMode::ALL
                .iter()
                .map(|mode| {
                    let selected = *mode == carousel.view_mode();
                    ViewModeOption {
                        mode: *mode,
                        label: mode.label(),
                        selected,
                        icon: render_icon(
                            icons,
                            Some(mode_icon(*mode)),
                            &IconProps {
                                active: selected,
                                ..props
                            },
                        ),
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let overview = if presentation.is_overview() {
            carousel
                .collection()
                .iter()
                .enumerate()
                .map(|(index, entry)| OverviewItem {
                    index,
                    record: ViewerRecord::from(entry),
                    selected: index == current,
                })
                .collect()
        } else {
            Vec::new()
        };

        let in_card = presentation == ViewMode::Carousel;
        let controls = Controls {
            previous: render_icon(
                icons,
                in_card.then_some(Icon::ChevronLeft),
                &props,
            ),
            next: render_icon(
                icons,
                in_card.then_some(Icon::ChevronRight),
                &props,
            ),
            calendar: render_icon(
                icons,
                in_card.then_some(Icon::Calendar),
                &props,
            ),
        };

        Self {
            presentation,
            card,
            direction: carousel.direction(),
            scrub_position: carousel.scrub_position(),
            ticks,
            view_modes,
            overview,
            controls,
            is_loading: carousel.is_loading(),
            autoplay_enabled: carousel.autoplay_enabled(),
        }
    }
}

fn mode_icon(mode: ViewMode) -> Icon {
    match mode {
        ViewMode::Carousel => Icon::Card,
        ViewMode::Grid => Icon::Grid,
        ViewMode::List => Icon::List,
    }
}
