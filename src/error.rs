//! Error types for the carousel library.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    /// The carousel needs at least one slide
    #[error("carousel needs at least one slide")]
    NoSlides,

    #[error("slide duration must be greater than zero")]
    InvalidDuration,

    #[error("progress tick must be greater than zero")]
    InvalidTick,

    /// Image directory could not be listed
    #[error("failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),
}

/// Failure signal for a single slide's backing asset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("asset for slide {slide} failed to load: {reason}")]
pub struct AssetError {
    pub slide: usize,
    pub reason: String,
}

pub type Result<T> = std::result::Result<T, CarouselError>;
