//! Headless chronological carousel.
//!
//! A fixed collection of dated [`memoir_model::Entry`] records is sorted once
//! at mount and browsed one slide at a time: arrows, keyboard, swipe, a year
//! timeline that can be scrubbed, and autoplay that gives up for good on the
//! first manual navigation. Narrow viewports can switch to grid or list
//! overviews. Rendering is left to the embedding toolkit through
//! [`view_models::CarouselView`], [`capabilities::FullScreenViewer`] and
//! [`capabilities::IconRenderer`].

pub mod capabilities;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod preload;
pub mod session;
pub mod view_models;

pub use carousel::{Carousel, CarouselMessage, ViewMode};
pub use config::CarouselConfig;
pub use error::{CarouselError, Result};
pub use session::{CarouselHandle, CarouselSession, SlideChange};
