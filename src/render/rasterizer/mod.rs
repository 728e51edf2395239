//! Triangle rasterization.
//!
//! - Wireframe: [`FrameBuffer::triangle`] draws the three edges as lines
//! - Filled: [`FrameBuffer::fill_triangle`] uses bounding box iteration with
//!   edge function tests, see [`edgefunction`]

mod edgefunction;
mod shader;

pub use edgefunction::{barycentric, edge_function};
pub use shader::PixelShader;

use super::framebuffer::{FrameBuffer, RasterResult};
use super::ScreenPoint;
use crate::colors::Color;

impl FrameBuffer {
    /// Draw the outline of triangle `a, b, c` as lines A→B, B→C, C→A.
    ///
    /// Each edge is an independent line, depth tested on its own when the
    /// vertices carry depth.
    pub fn triangle<P: ScreenPoint>(&mut self, a: P, b: P, c: P, color: Color) -> RasterResult {
        self.line(a, b, color)?;
        self.line(b, c, color)?;
        self.line(c, a, color)
    }
}
