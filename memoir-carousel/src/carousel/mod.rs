//! Chronological carousel
//!
//! Entries are sorted once at mount (year, then month when the date label
//! has one, then insertion order) and presented one at a time with a year
//! timeline underneath. The module splits the pure pieces (sorting, the
//! timeline axis, autoplay clock, gestures, viewport) from the [`Carousel`]
//! state machine that composes them and the [`update`] dispatcher that feeds
//! it messages.

pub mod autoplay;
pub mod collection;
pub mod gesture;
pub mod messages;
pub mod state;
pub mod timeline;
pub mod transition;
pub mod update;
pub mod viewport;

pub use autoplay::{AutoplayClock, AutoplayMode, AutoplayPhase, Suspension};
pub use collection::{EntryCollection, chronological_order};
pub use gesture::{Key, SwipeDirection, SwipeTracker};
pub use messages::CarouselMessage;
pub use state::{Carousel, LoadState, ScrubState};
pub use timeline::{TimelineAxis, TimelineTick};
pub use transition::{ActiveTransition, Direction, Easing, SlideTransition};
pub use update::update;
pub use viewport::{ViewMode, Viewport};
