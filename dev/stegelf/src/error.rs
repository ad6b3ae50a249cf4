use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Stegelf(#[from] stegelf::Error),
    #[error("failed to read image: {0}")]
    Image(#[from] ImageError),
    #[error("{} is a lossy format and would destroy the payload", .0.display())]
    LossyFormat(PathBuf),
    #[error("the carried object has no function named {0}")]
    MissingFunction(&'static str),
    #[error("{0} values do not fit an int index")]
    TooManyValues(usize),
}
