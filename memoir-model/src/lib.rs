//! Core data model for dated memory entries shared by the memoir crates.
#![allow(missing_docs)]

pub mod entry;
pub mod error;
pub mod ids;
pub mod image;
pub mod month;

pub use entry::{Entry, RemediationOutcome};
#[cfg(feature = "serde")]
pub use entry::entries_from_json;
pub use error::{ModelError, Result as ModelResult};
pub use ids::EntryId;
pub use image::ImageRef;
pub use month::{Month, parse_month};
