//! Orthographic projection from model space onto a frame buffer.
//!
//! Model space is right-handed with Y up; the frame buffer has row 0 at the
//! top. [`OrthoProjection`] drops nothing but rescales X and Y so the model's
//! bounding box spans the whole buffer, and flips Y on the way. Z passes
//! through untouched and is used as depth (larger Z is closer to the viewer).
//!
//! Counter-clockwise faces in model space come out with a positive edge
//! function area after the flip, which is the winding the triangle filler
//! draws.

use crate::math::Vec3;

/// Per-axis linear map from a model bounding box onto buffer pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoProjection {
    min: Vec3,
    extent: Vec3,
    width: u32,
    height: u32,
}

impl OrthoProjection {
    /// Fit the box `min..max` onto a `width` x `height` buffer.
    ///
    /// An axis with zero extent (a flat model) is treated as one unit wide
    /// rather than dividing by zero.
    pub fn fit(min: Vec3, max: Vec3, width: u32, height: u32) -> Self {
        let mut extent = max - min;
        for axis in 0..3 {
            if extent[axis] <= 0.0 {
                extent[axis] = 1.0;
            }
        }
        Self {
            min,
            extent,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Map a model-space vertex to screen space, keeping Z as depth.
    pub fn project(&self, vertex: Vec3) -> Vec3 {
        let span_x = self.width.saturating_sub(1) as f32;
        let span_y = self.height.saturating_sub(1) as f32;

        let x = span_x * (vertex.x - self.min.x) / self.extent.x;
        let y = span_y * (vertex.y - self.min.y) / self.extent.y;

        // Model Y points up, buffer rows go down
        Vec3::new(x, span_y - y, vertex.z)
    }
}
