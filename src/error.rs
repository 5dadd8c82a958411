use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpriteGridError>;

#[derive(Error, Debug)]
pub enum SpriteGridError {
    #[error("Failed to read input directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Failed to serialize sheet metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("Cannot infer an image format from output path '{0}'")]
    UnsupportedFormat(PathBuf),

    #[error("File name '{0}' does not start with an integer")]
    InvalidSortKey(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No .png images found in '{0}'")]
    NoImages(PathBuf),
}
