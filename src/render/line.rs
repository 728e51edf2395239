//! Bresenham line rasterization.
//!
//! Lines are drawn with integer-only stepping. The driving axis is whichever
//! of x or y changes more; the endpoints are swapped so iteration always runs
//! from the smaller driving coordinate to the larger one. That makes the pixel
//! set independent of the direction the line was specified in.
//!
//! The last pixel along the driving axis is not drawn, so a line covers
//! exactly `max(|dx|, |dy|)` pixels.
//!
//! # Depth
//!
//! For endpoints carrying depth, the depth written at step `i` along the
//! driving axis is `z_start + (z_end - z_start) * i`. The whole z delta is
//! scaled by the integer step count, not by `i / steps`, so depth runs past
//! `z_end` after the first step.

use super::framebuffer::{FrameBuffer, RasterResult};
use super::ScreenPoint;
use crate::colors::Color;
use crate::math::Pixel;

/// A rounded line endpoint.
#[derive(Clone, Copy, Debug)]
struct Endpoint {
    pixel: Pixel,
    depth: Option<f32>,
}

impl Endpoint {
    fn new<P: ScreenPoint>(point: P) -> Self {
        Self {
            pixel: point.position().round().as_pixel(),
            depth: point.depth(),
        }
    }

    /// Coordinates widened so deltas between saturated endpoints cannot overflow.
    #[inline]
    fn coords(&self) -> (i64, i64) {
        (i64::from(self.pixel.x), i64::from(self.pixel.y))
    }

    /// Depth `step` pixels along the driving axis from `self` towards `end`.
    #[inline]
    fn depth_at(&self, end: &Endpoint, step: usize) -> Option<f32> {
        match (self.depth, end.depth) {
            (Some(z0), Some(z1)) => Some(z0 + (z1 - z0) * step as f32),
            _ => None,
        }
    }
}

impl FrameBuffer {
    /// Draw a line from `start` to `end`, excluding the final pixel.
    ///
    /// Endpoints are rounded to the nearest pixel. Any pixel outside the buffer
    /// aborts the line with the error; pixels drawn before it stay drawn.
    pub fn line<P: ScreenPoint>(&mut self, start: P, end: P, color: Color) -> RasterResult {
        let from = Endpoint::new(start);
        let to = Endpoint::new(end);
        let ((x0, y0), (x1, y1)) = (from.coords(), to.coords());

        if (y1 - y0).abs() < (x1 - x0).abs() {
            if x0 > x1 {
                self.line_low(to, from, color)
            } else {
                self.line_low(from, to, color)
            }
        } else if y0 > y1 {
            self.line_high(to, from, color)
        } else {
            self.line_high(from, to, color)
        }
    }

    /// Shallow lines (`|dy| < |dx|`), walking x left to right.
    fn line_low(&mut self, start: Endpoint, end: Endpoint, color: Color) -> RasterResult {
        let ((x0, y0), (x1, y1)) = (start.coords(), end.coords());
        let dx = x1 - x0;
        let mut dy = y1 - y0;

        let mut y_step = 1;
        if dy < 0 {
            y_step = -1;
            dy = -dy;
        }

        // Decision variable, doubled so it stays integral.
        let mut error = 2 * dy - dx;
        let mut y = y0;

        // x and y stay between the endpoints, so they fit back into i32.
        for (step, x) in (x0..x1).enumerate() {
            self.plot(Pixel::new(x as i32, y as i32), color, start.depth_at(&end, step))?;

            if error > 0 {
                y += y_step;
                error += 2 * (dy - dx);
            } else {
                error += 2 * dy;
            }
        }
        Ok(())
    }

    /// Steep lines (`|dy| >= |dx|`), walking y top to bottom.
    fn line_high(&mut self, start: Endpoint, end: Endpoint, color: Color) -> RasterResult {
        let ((x0, y0), (x1, y1)) = (start.coords(), end.coords());
        let mut dx = x1 - x0;
        let dy = y1 - y0;

        let mut x_step = 1;
        if dx < 0 {
            x_step = -1;
            dx = -dx;
        }

        let mut error = 2 * dx - dy;
        let mut x = x0;

        for (step, y) in (y0..y1).enumerate() {
            self.plot(Pixel::new(x as i32, y as i32), color, start.depth_at(&end, step))?;

            if error > 0 {
                x += x_step;
                error += 2 * (dx - dy);
            } else {
                error += 2 * dx;
            }
        }
        Ok(())
    }
}
