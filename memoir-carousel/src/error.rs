use memoir_model::{EntryId, ModelError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Carousel needs at least one entry")]
    EmptyCollection,

    #[error("Duplicate entry id {0}")]
    DuplicateId(EntryId),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
