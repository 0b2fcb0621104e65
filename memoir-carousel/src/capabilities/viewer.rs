//! Full-screen image viewer hand-off
//!
//! The viewer owns its own key bindings (Escape/Left/Right) and reports them
//! back as [`ViewerCommand`]s; navigation logic stays in the carousel.

use memoir_model::{Entry, EntryId};

/// What the viewer needs to render one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerRecord {
    pub id: EntryId,
    pub src: String,
    pub title: String,
    pub description: String,
    pub date: String,
}

impl From<&Entry> for ViewerRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            src: entry.image.as_str().to_string(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            date: entry.date.clone(),
        }
    }
}

/// Callbacks from the viewer into the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Next,
    Previous,
    Close,
}

pub trait FullScreenViewer {
    /// Show `record`, replacing whatever is displayed.
    fn open(&mut self, record: &ViewerRecord);

    fn close(&mut self);
}

/// Viewer that displays nothing, for headless sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopViewer;

impl FullScreenViewer for NoopViewer {
    fn open(&mut self, record: &ViewerRecord) {
        log::debug!("Viewer open requested for {} (headless)", record.id);
    }

    fn close(&mut self) {}
}
