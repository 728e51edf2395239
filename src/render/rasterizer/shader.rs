//! Per-pixel color sources for filled triangles.
//!
//! The rasterizer handles coverage, barycentric weights and depth; a
//! [`PixelShader`] only decides what color a covered pixel gets.

use crate::colors::Color;

/// Trait for per-pixel shading computations.
///
/// The rasterizer calls `shade()` for each pixel inside the triangle,
/// providing the barycentric coordinates for attribute interpolation.
///
/// # Barycentric Coordinates
///
/// The `lambda` parameter contains three weights [λ₀, λ₁, λ₂], one per vertex
/// in the order the triangle was given. They sum to 1.0 and can interpolate
/// any per-vertex attribute: `attr = λ₀*attr₀ + λ₁*attr₁ + λ₂*attr₂`.
pub trait PixelShader {
    fn shade(&self, lambda: [f32; 3]) -> Color;
}

/// A plain color fills the whole triangle.
impl PixelShader for Color {
    #[inline]
    fn shade(&self, _lambda: [f32; 3]) -> Color {
        *self
    }
}

/// Any closure over the barycentric weights is a shader.
impl<F> PixelShader for F
where
    F: Fn([f32; 3]) -> Color,
{
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> Color {
        self(lambda)
    }
}
