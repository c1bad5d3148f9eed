//! Circle fill and stroke via the midpoint algorithm

use super::Surface;
use crate::format::Color;

/// Octant points of a midpoint circle of the given radius, relative to the
/// center.
///
/// Starts at `(0, r)` with `d = 3 - 2r` and steps `x` until `y < x`. The
/// point produced by the final step is included, so the eight reflections
/// of every yielded pair cover the whole circle. Radius 0 still yields the
/// overshoot point `(1, -1)`, so callers draw that case as a single pixel.
#[derive(Debug, Clone)]
pub struct MidpointCircle {
    x: i64,
    y: i64,
    d: i64,
    started: bool,
}

impl MidpointCircle {
    pub fn new(radius: i32) -> Self {
        let r = i64::from(radius);
        Self {
            x: 0,
            y: r,
            d: 3 - 2 * r,
            started: false,
        }
    }
}

impl Iterator for MidpointCircle {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some((self.x, self.y));
        }
        if self.y < self.x {
            return None;
        }
        self.x += 1;
        if self.d >= 0 {
            self.y -= 1;
            self.d += 4 * (self.x - self.y) + 10;
        } else {
            self.d += 4 * self.x + 6;
        }
        Some((self.x, self.y))
    }
}

impl Surface<'_> {
    /// True if the closed box `[xc-r, xc+r] x [yc-r, yc+r]` lies on the surface
    fn circle_fits(&self, xc: i64, yc: i64, r: i64) -> bool {
        r >= 0 && self.contains(xc - r, yc - r) && self.contains(xc + r, yc + r)
    }

    /// Outline a circle. Nothing is drawn unless the whole bounding box is on
    /// the surface.
    pub fn stroke_circle(&mut self, xc: i32, yc: i32, radius: i32, color: Color) {
        let (cx, cy) = (i64::from(xc), i64::from(yc));
        if !self.circle_fits(cx, cy, radius.into()) {
            log::debug!("circle at ({}, {}) r={} not fully on surface", xc, yc, radius);
            return;
        }
        let word = self.word(color);
        if radius == 0 {
            self.put_word(cx, cy, word);
            return;
        }
        for (x, y) in MidpointCircle::new(radius) {
            self.put_word(cx + x, cy + y, word);
            self.put_word(cx - x, cy + y, word);
            self.put_word(cx + x, cy - y, word);
            self.put_word(cx - x, cy - y, word);
            self.put_word(cx + y, cy + x, word);
            self.put_word(cx - y, cy + x, word);
            self.put_word(cx + y, cy - x, word);
            self.put_word(cx - y, cy - x, word);
        }
    }

    /// Fill a disk with horizontal spans. Nothing is drawn unless the whole
    /// bounding box is on the surface.
    pub fn fill_circle(&mut self, xc: i32, yc: i32, radius: i32, color: Color) {
        let (cx, cy) = (i64::from(xc), i64::from(yc));
        if !self.circle_fits(cx, cy, radius.into()) {
            log::debug!("circle at ({}, {}) r={} not fully on surface", xc, yc, radius);
            return;
        }
        let word = self.word(color);
        if radius == 0 {
            self.put_word(cx, cy, word);
            return;
        }
        for (x, y) in MidpointCircle::new(radius) {
            self.fill_span(cx - x, cy + y, 2 * x + 1, 1, word);
            self.fill_span(cx - x, cy - y, 2 * x + 1, 1, word);
            self.fill_span(cx - y, cy + x, 2 * y + 1, 1, word);
            self.fill_span(cx - y, cy - x, 2 * y + 1, 1, word);
        }
    }
}
