//! Error taxonomy for surface construction, resizing and configuration
//!
//! Drawing operations never fail: out-of-range geometry is clipped or
//! skipped. Only the entry points that allocate or wrap memory report errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("unsupported pixel format {0}")]
    UnsupportedFormat(u32),
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },
    #[error("pixel buffer too small: need {needed} words, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
    #[error("cannot allocate {words} pixel words")]
    Alloc { words: usize },
    #[error("pixel buffer is not aligned to 32-bit words")]
    Misaligned,
    #[error("surface config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CanvasError>;
