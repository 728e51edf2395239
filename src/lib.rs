//! A minimal CPU software rasterizer.
//!
//! Everything draws into a [`FrameBuffer`]: an owned color grid plus a depth
//! buffer. On top of that sit Bresenham lines, wireframe and filled triangles,
//! and a small pipeline that projects an OBJ model orthographically and writes
//! the result to an image file.
//!
//! # Quick Start
//!
//! ```no_run
//! use rastrs::prelude::*;
//!
//! let mut buffer = FrameBuffer::new(64, 64);
//! buffer.fill_triangle(
//!     Vec2::new(4.0, 60.0),
//!     Vec2::new(60.0, 60.0),
//!     Vec2::new(32.0, 4.0),
//!     &colors::RED,
//! )?;
//! rastrs::export::save(&buffer, "triangle.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod colors;
pub mod config;
pub mod console;
pub mod engine;
pub mod export;
pub mod math;
pub mod model;
pub mod projection;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use colors::Color;
pub use engine::{render_model, RenderMode, RenderStats};
pub use model::{Model, ModelError};
pub use projection::OrthoProjection;
pub use render::{FrameBuffer, RasterError};

/// Prelude module for convenient imports.
pub mod prelude {
    // Colors
    pub use crate::colors::{self, Color};

    // Engine
    pub use crate::engine::{render_model, RenderMode};

    // Model & projection
    pub use crate::model::Model;
    pub use crate::projection::OrthoProjection;

    // Math
    pub use crate::math::{Pixel, Vec2, Vec3};

    // Rendering
    pub use crate::render::{FrameBuffer, PixelShader, ScreenPoint};
}
