//! Render snapshots for embedding UIs.

pub mod carousel_view;

pub use carousel_view::{
    CardView, CarouselView, Controls, OverviewItem, TickView, ViewModeOption,
};
