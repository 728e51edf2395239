//! Frame buffer and the rasterizers that draw into it.

mod framebuffer;
mod line;
mod rasterizer;

pub use framebuffer::{FrameBuffer, RasterError, RasterResult, CLEAR_DEPTH};
pub use rasterizer::{barycentric, edge_function, PixelShader};

use crate::math::{Vec2, Vec3};

/// A vertex in screen space as seen by the rasterizers.
///
/// `Vec2` points carry no depth and are written without a depth test. `Vec3`
/// points use `z` as depth (larger is closer) and go through the depth buffer.
pub trait ScreenPoint: Copy {
    fn position(&self) -> Vec2;
    fn depth(&self) -> Option<f32>;
}

impl ScreenPoint for Vec2 {
    #[inline]
    fn position(&self) -> Vec2 {
        *self
    }

    #[inline]
    fn depth(&self) -> Option<f32> {
        None
    }
}

impl ScreenPoint for Vec3 {
    #[inline]
    fn position(&self) -> Vec2 {
        self.xy()
    }

    #[inline]
    fn depth(&self) -> Option<f32> {
        Some(self.z)
    }
}
