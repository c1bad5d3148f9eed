//! Rectangle fill and stroke

use super::Surface;
use crate::format::Color;
use crate::ops::fill_words;

impl Surface<'_> {
    /// Fill a rectangle, clipped to the surface.
    ///
    /// A negative origin eats into the extent; the far edge is clamped to the
    /// surface size; an origin past the right or bottom edge draws nothing.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let word = self.word(color);
        self.fill_span(x.into(), y.into(), w.into(), h.into(), word);
    }

    /// Outline the box `[x, x+w] x [y, y+h]` with a 1px border.
    ///
    /// Built from four 1px `fill_rect` calls, so it clips exactly like a fill.
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let word = self.word(color);
        let (x, y, w, h) = (i64::from(x), i64::from(y), i64::from(w), i64::from(h));
        self.fill_span(x, y, w, 1, word);
        self.fill_span(x, y, 1, h, word);
        self.fill_span(x, y + h, w, 1, word);
        self.fill_span(x + w, y, 1, h + 1, word);
    }

    /// Clip `(x, y, w, h)` against the surface.
    /// Returns the half-open column and row ranges, or `None` if nothing is left.
    pub(super) fn clip_rect(
        &self,
        mut x: i64,
        mut y: i64,
        mut w: i64,
        mut h: i64,
    ) -> Option<(usize, usize, usize, usize)> {
        let sw = i64::from(self.width);
        let sh = i64::from(self.height);

        if x < 0 {
            w += x;
            x = 0;
        } else if x > sw {
            return None;
        }
        if y < 0 {
            h += y;
            y = 0;
        } else if y > sh {
            return None;
        }

        w = w.min(sw - x);
        h = h.min(sh - y);
        if w <= 0 || h <= 0 {
            return None;
        }
        Some((x as usize, (x + w) as usize, y as usize, (y + h) as usize))
    }

    /// Fill a clipped rectangle with a precomputed word, one `fill_words` per row
    pub(super) fn fill_span(&mut self, x: i64, y: i64, w: i64, h: i64, word: u32) {
        let Some((x0, x1, y0, y1)) = self.clip_rect(x, y, w, h) else {
            return;
        };
        let stride = self.width as usize;
        let pixels = self.pixels_mut();
        for row in y0..y1 {
            let start = row * stride;
            fill_words(&mut pixels[start + x0..start + x1], word);
        }
    }
}
