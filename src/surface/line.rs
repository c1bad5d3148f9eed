//! Line stroking

use super::Surface;
use crate::format::Color;

/// Integer Bresenham walk from `(x0, y0)` toward `(x1, y1)`.
///
/// Yields `max(|dx|, |dy|)` points; the far endpoint itself is not part of
/// the line, matching the half-open spans used for axis-aligned lines.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    step_x: i64,
    step_y: i64,
    major: i64,
    minor: i64,
    steep: bool,
    d: i64,
    remaining: i64,
}

impl LinePoints {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = i64::from(x1) - i64::from(x0);
        let dy = i64::from(y1) - i64::from(y0);
        let steep = dy.abs() > dx.abs();
        let (major, minor) = if steep {
            (dy.abs(), dx.abs())
        } else {
            (dx.abs(), dy.abs())
        };
        Self {
            x: x0.into(),
            y: y0.into(),
            step_x: dx.signum(),
            step_y: dy.signum(),
            major,
            minor,
            steep,
            d: 2 * minor - major,
            remaining: major,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let point = (self.x, self.y);

        if self.d > 0 {
            if self.steep {
                self.x += self.step_x;
            } else {
                self.y += self.step_y;
            }
            self.d -= 2 * self.major;
        }
        self.d += 2 * self.minor;
        if self.steep {
            self.y += self.step_y;
        } else {
            self.x += self.step_x;
        }
        self.remaining -= 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

impl Surface<'_> {
    /// Stroke a 1px line from `(x0, y0)` toward `(x1, y1)`, far endpoint excluded.
    ///
    /// Horizontal and vertical lines are drawn as 1px rectangles and get the
    /// same clipping as `fill_rect`. Any other line is not clipped: if either
    /// endpoint is off the surface nothing is drawn.
    pub fn stroke_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let word = self.word(color);
        let (ax, ay, bx, by) = (
            i64::from(x0),
            i64::from(y0),
            i64::from(x1),
            i64::from(y1),
        );

        if ay == by {
            let left = ax.min(bx);
            self.fill_span(left, ay, (bx - ax).abs(), 1, word);
            return;
        }
        if ax == bx {
            let top = ay.min(by);
            self.fill_span(ax, top, 1, (by - ay).abs(), word);
            return;
        }

        if !self.contains(ax, ay) || !self.contains(bx, by) {
            log::debug!(
                "line ({}, {}) -> ({}, {}) leaves {}x{} surface, skipped",
                x0,
                y0,
                x1,
                y1,
                self.width,
                self.height
            );
            return;
        }

        // Both endpoints are on the surface, so every point of the walk is too
        let stride = self.width as usize;
        let pixels = self.pixels_mut();
        for (x, y) in LinePoints::new(x0, y0, x1, y1) {
            pixels[y as usize * stride + x as usize] = word;
        }
    }
}
