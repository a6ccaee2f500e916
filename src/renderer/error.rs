use std::path::PathBuf;

use thiserror::Error;

use crate::widgets::RectF;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot create a {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },
    #[error("Could not build a path for {0:?}")]
    DegeneratePath(RectF),
    #[error("Pixel buffer does not fit a {width}x{height} image")]
    BufferSize { width: u32, height: u32 },
    #[error("Cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
