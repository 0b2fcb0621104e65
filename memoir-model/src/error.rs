use thiserror::Error;

use crate::ids::EntryId;

/// Errors produced by model constructors and validation routines.
#[derive(Error, Debug)]
pub enum ModelError {
    #[cfg(feature = "serde")]
    #[error("Malformed entry data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid entry {id}: {reason}")]
    InvalidEntry { id: EntryId, reason: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
