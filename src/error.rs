use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("SVG parsing error: {0}")]
    SvgParsing(#[from] resvg::usvg::Error),

    #[error("SVG rendering error: {0}")]
    SvgRender(String),

    #[error("WebP encoding error: {0}")]
    WebpEncoding(String),

    #[error("Invalid quality value: {0}. Must be between 0 and 100")]
    InvalidQuality(u8),

    #[error("Invalid file name: {0}")]
    InvalidFileName(PathBuf),

    #[error("Output would overwrite its own source: {0}")]
    SameInputOutput(PathBuf),

    #[error("No files selected.")]
    NoFilesSelected,

    #[error(
        "No valid image files detected. Supported extensions: jpg, jpeg, png, webp, svg, gif, avif, tiff"
    )]
    NoValidImageFiles,

    #[error("Cannot rename files when compressing multiple images ({0} files selected).")]
    RenameWithMultipleFiles(usize),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
