//! # softcanvas
//!
//! A minimal software rasterizer over packed 32-bit pixel surfaces.
//!
//! A [`Surface`] owns or borrows a row-major buffer of `width * height`
//! words. Drawing calls write into it directly:
//!
//! - [`Surface::fill_rect`] / [`Surface::stroke_rect`]
//! - [`Surface::stroke_line`] (Bresenham)
//! - [`Surface::fill_circle`] / [`Surface::stroke_circle`] (midpoint, 8-way symmetry)
//! - [`Surface::blit`] / [`Surface::blit_mask`] (color-key transparency)
//!
//! All of it bottoms out in the three span primitives in [`ops`].
//!
//! ```
//! use softcanvas::{Color, PixelFormat, Surface};
//!
//! let mut s = Surface::new(4, 4, PixelFormat::Argb32)?;
//! s.fill_circle(2, 2, 1, Color::RED);
//! assert_eq!(s.pixel(2, 1), Some(0xffff_0000));
//! assert_eq!(s.pixel(0, 0), Some(0xff00_0000));
//! # Ok::<(), softcanvas::CanvasError>(())
//! ```
//!
//! The crate is single-threaded; a surface shared between threads needs
//! external locking.

pub mod config;
pub mod error;
pub mod format;
pub mod ops;
pub mod surface;

pub use config::SurfaceConfig;
pub use error::{CanvasError, Result};
pub use format::{color_to_word, word_to_color, Color, PixelFormat};
pub use surface::{LinePoints, MidpointCircle, Surface};
