//! Surface-to-surface copies

use super::Surface;
use crate::format::Color;
use crate::ops::{copy_words, mask_copy_words};

impl Surface<'_> {
    /// Copy all of `src` onto this surface with its top-left corner at
    /// `(dx, dy)`. Words are copied verbatim, without format conversion.
    ///
    /// Rows and columns that would land off this surface are dropped.
    pub fn blit(&mut self, src: &Surface<'_>, dx: i32, dy: i32) {
        self.composite_rows(src, dx, dy, copy_words);
    }

    /// Like [`blit`](Self::blit), but source pixels equal to `key` (packed in
    /// the source's format) are transparent and leave the destination as is.
    pub fn blit_mask(&mut self, src: &Surface<'_>, dx: i32, dy: i32, key: Color) {
        let key = src.word(key);
        self.composite_rows(src, dx, dy, |d, s| mask_copy_words(d, s, key));
    }

    /// Walk the rows of `src` that overlap this surface and hand each pair of
    /// equally long spans to `op`
    fn composite_rows<F>(&mut self, src: &Surface<'_>, dx: i32, dy: i32, mut op: F)
    where
        F: FnMut(&mut [u32], &[u32]),
    {
        let (dx, dy) = (i64::from(dx), i64::from(dy));
        let (sw, sh) = (i64::from(src.width), i64::from(src.height));
        let (dw, dh) = (i64::from(self.width), i64::from(self.height));

        let col0 = (-dx).max(0);
        let col1 = sw.min(dw - dx);
        let row0 = (-dy).max(0);
        let row1 = sh.min(dh - dy);
        if col0 >= col1 || row0 >= row1 {
            log::trace!("blit of {}x{} at ({}, {}) misses destination", sw, sh, dx, dy);
            return;
        }
        if col0 > 0 || row0 > 0 || col1 < sw || row1 < sh {
            log::trace!("blit of {}x{} at ({}, {}) clipped", sw, sh, dx, dy);
        }

        let count = (col1 - col0) as usize;
        let src_stride = src.width as usize;
        let dst_stride = self.width as usize;
        let src_pixels = src.pixels();
        let dst_pixels = self.pixels_mut();

        for sy in row0..row1 {
            let s = sy as usize * src_stride + col0 as usize;
            let d = (dy + sy) as usize * dst_stride + (dx + col0) as usize;
            op(&mut dst_pixels[d..d + count], &src_pixels[s..s + count]);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::format::{Color, PixelFormat};
    use crate::surface::Surface;
    use test_log::test;

    fn numbered(w: i32, h: i32) -> Surface<'static> {
        let mut s = Surface::new(w, h, PixelFormat::Argb32).unwrap();
        for (i, px) in s.pixels_mut().iter_mut().enumerate() {
            *px = 0xff00_0000 | i as u32;
        }
        s
    }

    #[test]
    fn blit_copies_at_offset() {
        let src = numbered(3, 2);
        let mut dst = Surface::new(8, 6, PixelFormat::Argb32).unwrap();
        dst.blit(&src, 4, 3);
        for j in 0..2 {
            for i in 0..3 {
                assert_eq!(dst.pixel(4 + i, 3 + j), src.pixel(i, j));
            }
        }
        assert_eq!(dst.pixel(3, 3), Some(0xff00_0000));
        assert_eq!(dst.pixel(7, 3), Some(0xff00_0000));
        assert_eq!(dst.pixel(4, 5), Some(0xff00_0000));
    }

    #[test]
    fn blit_clips_at_every_edge() {
        let src = numbered(4, 4);
        let mut dst = Surface::new(5, 5, PixelFormat::Argb32).unwrap();
        dst.blit(&src, -2, -1);
        assert_eq!(dst.pixel(0, 0), src.pixel(2, 1));
        assert_eq!(dst.pixel(1, 2), src.pixel(3, 3));
        assert_eq!(dst.pixel(2, 0), Some(0xff00_0000));

        let mut dst = Surface::new(5, 5, PixelFormat::Argb32).unwrap();
        dst.blit(&src, 3, 4);
        assert_eq!(dst.pixel(3, 4), src.pixel(0, 0));
        assert_eq!(dst.pixel(4, 4), src.pixel(1, 0));

        let mut dst = Surface::new(5, 5, PixelFormat::Argb32).unwrap();
        dst.blit(&src, 5, 0);
        dst.blit(&src, -4, 0);
        dst.blit(&src, i32::MAX, i32::MIN);
        assert!(dst.pixels().iter().all(|&w| w == 0xff00_0000));
    }

    #[test]
    fn blit_is_verbatim_across_formats() {
        let mut src = Surface::new(2, 1, PixelFormat::Rgb24).unwrap();
        src.clear(Color::rgba(1, 2, 3, 4));
        let mut dst = Surface::new(2, 1, PixelFormat::Argb32).unwrap();
        dst.blit(&src, 0, 0);
        assert_eq!(dst.pixels(), &[0x0001_0203, 0x0001_0203]);
    }

    #[test]
    fn mask_skips_key_pixels() {
        let mut src = Surface::new(3, 1, PixelFormat::Argb32).unwrap();
        src.set_pixel(0, 0, Color::GREEN);
        src.set_pixel(1, 0, Color::RED);
        src.set_pixel(2, 0, Color::GREEN);
        let mut dst = Surface::new(3, 1, PixelFormat::Argb32).unwrap();
        dst.clear(Color::BLUE);
        dst.blit_mask(&src, 0, 0, Color::GREEN);
        assert_eq!(
            dst.pixels(),
            &[0xff00_00ff, 0xffff_0000, 0xff00_00ff]
        );
    }

    #[test]
    fn mask_clips_at_negative_offset() {
        let mut src = numbered(4, 4);
        src.set_pixel(2, 1, Color::GREEN);
        src.set_pixel(3, 2, Color::GREEN);
        let blue = 0xff00_00ff;
        let mut dst = Surface::new(5, 5, PixelFormat::Argb32).unwrap();
        dst.clear(Color::BLUE);
        dst.blit_mask(&src, -2, -1, Color::GREEN);
        for y in 0..5 {
            for x in 0..5 {
                let expected = match (x, y) {
                    (0, 0) | (1, 1) => Some(blue),
                    (0..=1, 0..=2) => src.pixel(x + 2, y + 1),
                    _ => Some(blue),
                };
                assert_eq!(dst.pixel(x, y), expected, "({}, {})", x, y);
            }
        }

        let mut dst = Surface::new(5, 5, PixelFormat::Argb32).unwrap();
        dst.clear(Color::BLUE);
        dst.blit_mask(&src, -4, -4, Color::GREEN);
        dst.blit_mask(&src, 5, 2, Color::GREEN);
        dst.blit_mask(&src, i32::MIN, i32::MAX, Color::GREEN);
        assert!(dst.pixels().iter().all(|&w| w == blue));
    }

    #[test]
    fn mask_key_uses_source_format() {
        // Rgb24 drops alpha, so any alpha in the key still matches
        let mut src = Surface::new(2, 1, PixelFormat::Rgb24).unwrap();
        src.clear(Color::WHITE);
        let mut dst = Surface::new(2, 1, PixelFormat::Argb32).unwrap();
        dst.blit_mask(&src, 0, 0, Color::rgba(255, 255, 255, 0));
        assert!(dst.pixels().iter().all(|&w| w == 0xff00_0000));
    }

    #[test]
    fn borrowed_destination() {
        let src = numbered(2, 2);
        let mut buf = vec![0u32; 9];
        {
            let mut dst = Surface::from_buffer(&mut buf, 3, 3, PixelFormat::Argb32).unwrap();
            dst.blit(&src, 1, 1);
        }
        assert_eq!(buf, vec![0, 0, 0, 0, 0xff00_0000, 0xff00_0001, 0, 0xff00_0002, 0xff00_0003]);
    }
}
