//! Collaborators the carousel hands work to but does not implement.

pub mod icons;
pub mod viewer;

pub use icons::{Icon, IconName, IconProps, IconRenderer, render_icon};
pub use viewer::{FullScreenViewer, NoopViewer, ViewerCommand, ViewerRecord};
