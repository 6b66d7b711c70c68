use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TurbidError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Shape mismatch in {context}: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch {
        context: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("No supported images found in {}", .0.display())]
    NoImages(PathBuf),
}

pub type Result<T> = std::result::Result<T, TurbidError>;
