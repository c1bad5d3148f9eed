mod blit;
mod circle;
mod line;
mod rect;

pub use circle::MidpointCircle;
pub use line::LinePoints;

use crate::config::SurfaceConfig;
use crate::error::{CanvasError, Result};
use crate::format::{word_to_color, Color, PixelFormat};
use crate::ops::fill_words;

// ============================================================================
// Pixel storage
// ============================================================================

/// Backing store of a surface.
///
/// An owned buffer is freed with the surface; a borrowed one goes back to
/// whoever lent it. A borrowed slice may be longer than the surface needs,
/// only the first `width * height` words are addressed.
#[derive(Debug)]
pub(crate) enum Pixels<'a> {
    Owned(Vec<u32>),
    Borrowed(&'a mut [u32]),
}

impl Pixels<'_> {
    /// Total words available, which bounds how far a surface can grow in place
    #[inline]
    fn capacity(&self) -> usize {
        match self {
            Self::Owned(v) => v.len(),
            Self::Borrowed(s) => s.len(),
        }
    }

    #[inline]
    fn words(&self) -> &[u32] {
        match self {
            Self::Owned(v) => v,
            Self::Borrowed(s) => s,
        }
    }

    #[inline]
    fn words_mut(&mut self) -> &mut [u32] {
        match self {
            Self::Owned(v) => v,
            Self::Borrowed(s) => s,
        }
    }
}

/// Reserve room for `additional` more words without aborting on exhaustion
fn reserve_words(words: &mut Vec<u32>, additional: usize) -> Result<()> {
    words.try_reserve_exact(additional).map_err(|e| {
        log::debug!("cannot reserve {} pixel words: {}", additional, e);
        CanvasError::Alloc {
            words: words.len().saturating_add(additional),
        }
    })
}

/// Validate signed dimensions and return them with the word count they need
fn checked_dims(width: i64, height: i64) -> Result<(u32, u32, usize)> {
    let invalid = || CanvasError::InvalidDimension { width, height };
    let w = u32::try_from(width).map_err(|_| invalid())?;
    let h = u32::try_from(height).map_err(|_| invalid())?;
    let len = (w as usize).checked_mul(h as usize).ok_or_else(invalid)?;
    Ok((w, h, len))
}

// ============================================================================
// Surface
// ============================================================================

/// A rectangular grid of packed 32-bit pixels.
///
/// Row-major, `width` words per row, no padding. Every drawing call writes
/// straight into the buffer.
#[derive(Debug)]
pub struct Surface<'a> {
    pixels: Pixels<'a>,
    width: u32,
    height: u32,
    format: PixelFormat,
}

impl Surface<'static> {
    /// Allocate an owned surface.
    ///
    /// `Argb32` starts as opaque black, `Rgb24` as all zero.
    pub fn new(width: i32, height: i32, format: PixelFormat) -> Result<Self> {
        Self::alloc(width.into(), height.into(), format)
    }

    /// Allocate an owned surface from a raw format tag.
    /// Unknown tags are reported before anything is allocated.
    pub fn create_raw(width: i32, height: i32, raw_format: u32) -> Result<Self> {
        let format = PixelFormat::from_raw(raw_format)?;
        Self::new(width, height, format)
    }

    /// Allocate an owned surface described by `config`
    pub fn from_config(config: &SurfaceConfig) -> Result<Self> {
        Self::alloc(config.width.into(), config.height.into(), config.format)
    }

    fn alloc(width: i64, height: i64, format: PixelFormat) -> Result<Self> {
        let (width, height, len) = checked_dims(width, height)?;
        let mut words = Vec::new();
        reserve_words(&mut words, len)?;
        words.resize(len, 0);
        fill_words(&mut words, format.initial_word());
        log::trace!("allocated {}x{} {} surface", width, height, format);
        Ok(Self {
            pixels: Pixels::Owned(words),
            width,
            height,
            format,
        })
    }
}

impl<'a> Surface<'a> {
    /// Wrap caller-owned memory. The contents are left as they are and the
    /// buffer is never freed by the surface.
    pub fn from_buffer(
        buffer: &'a mut [u32],
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Self> {
        let (width, height, needed) = checked_dims(width.into(), height.into())?;
        if buffer.len() < needed {
            return Err(CanvasError::BufferTooSmall {
                needed,
                actual: buffer.len(),
            });
        }
        Ok(Self {
            pixels: Pixels::Borrowed(buffer),
            width,
            height,
            format,
        })
    }

    /// Wrap a caller-owned byte buffer, e.g. a mapped framebuffer.
    /// The bytes must be 4-byte aligned and a whole number of words.
    pub fn from_bytes(
        buffer: &'a mut [u8],
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Self> {
        let words: &mut [u32] =
            bytemuck::try_cast_slice_mut(buffer).map_err(|_| CanvasError::Misaligned)?;
        Self::from_buffer(words, width, height, format)
    }

    /// Tear the surface down. Owned pixels are freed here, borrowed ones are
    /// handed back to their owner.
    pub fn destroy(self) {
        log::trace!(
            "destroying {}x{} surface ({})",
            self.width,
            self.height,
            if self.is_owned() { "owned" } else { "borrowed" }
        );
    }

    /// Change the dimensions. Fails with the surface untouched if either is
    /// negative, if an owned buffer cannot grow, or if a borrowed buffer
    /// cannot hold the new size.
    ///
    /// Pixel content after a resize is not meaningful; clear it before use.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        let (width, height, len) = checked_dims(width.into(), height.into()).map_err(|e| {
            log::debug!("rejected resize to {}x{}", width, height);
            e
        })?;

        match &mut self.pixels {
            Pixels::Owned(words) => {
                let additional = len.saturating_sub(words.len());
                reserve_words(words, additional)?;
                words.resize(len, 0);
            }
            borrowed => {
                let actual = borrowed.capacity();
                if actual < len {
                    return Err(CanvasError::BufferTooSmall {
                        needed: len,
                        actual,
                    });
                }
            }
        }

        log::trace!(
            "resized surface {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        self.width = width;
        self.height = height;
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// True if the surface frees its buffer on drop
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self.pixels, Pixels::Owned(_))
    }

    /// Number of addressable pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw pixel words, exactly `width * height` of them
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        let len = self.len();
        &self.pixels.words()[..len]
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        let len = self.len();
        &mut self.pixels.words_mut()[..len]
    }

    /// Pixel words as native-endian bytes, for handing to a display layer
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels())
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(self.pixels_mut())
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64
    }

    /// Word index of `(x, y)`: `row * width + col`
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x.into(), y.into())
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Read one pixel word (bounds checked)
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels()[i])
    }

    /// Read one pixel as a color (bounds checked)
    pub fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        self.pixel(x, y).map(|w| word_to_color(self.format, w))
    }

    /// One row of pixels, or `None` past the bottom edge
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.pixels()[start..start + w])
    }

    /// Pack `color` for this surface's format
    #[inline]
    pub fn word(&self, color: Color) -> u32 {
        self.format.word(color)
    }

    /// Fill the whole surface with one color
    pub fn clear(&mut self, color: Color) {
        let word = self.word(color);
        fill_words(self.pixels_mut(), word);
    }

    /// Set a single pixel (bounds checked, out-of-range writes are dropped)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let word = self.word(color);
        if let Some(i) = self.index(x, y) {
            self.pixels_mut()[i] = word;
        }
    }

    /// Write a precomputed word at `(x, y)` if it is on the surface
    #[inline]
    fn put_word(&mut self, x: i64, y: i64, word: u32) {
        if self.contains(x, y) {
            let i = y as usize * self.width as usize + x as usize;
            self.pixels_mut()[i] = word;
        }
    }
}
