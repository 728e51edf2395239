//! Edge function-based triangle rasterization.
//!
//! The algorithm tests each pixel of the triangle's bounding box against three
//! edge equations, the approach behind GPU rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Bounding box: floor of the component-wise minimum vertex to ceil of the
//!    component-wise maximum vertex, exclusive at the top end
//! 2. For each pixel in the box, evaluate the edge function at the pixel center
//!    for edges (A,B), (B,C) and (C,A)
//! 3. Pixels where all three values are non-negative are inside
//!
//! # Edge Function
//!
//! For an edge from point A to point B, the edge function at point P is:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! # Winding Order
//!
//! Only triangles with `E_AB(C) > 0` are filled. With Y pointing down in the
//! buffer that is counter-clockwise in the right-handed model space the
//! projection flips from. Clockwise triangles are treated as back faces and
//! write nothing; there is no runtime winding detection.
//!
//! # Shared Edges
//!
//! A sample lying exactly on an edge (`E == 0`) is inside only if that edge is
//! a top or left edge (`dy > 0`, or `dy == 0 && dx < 0`). The same edge walked
//! in the opposite direction by the neighbouring triangle is then neither, so
//! two triangles sharing an edge never both claim a pixel and never leave a
//! gap between them. Edge values are evaluated in one canonical direction per
//! edge and negated as needed, so both neighbours see bit-identical values.
//!
//! # Barycentric Coordinates
//!
//! ```text
//! lambda_i = E_i(P) / E_AB(C)
//! ```
//!
//! where E_i is the edge function of the edge opposite vertex i. They drive
//! depth interpolation and are handed to the [`PixelShader`].

use super::shader::PixelShader;
use crate::math::{Pixel, Vec2};
use crate::render::framebuffer::{FrameBuffer, RasterResult};
use crate::render::ScreenPoint;

/// Computes the edge function value for point `p` relative to edge (a -> b).
///
/// Twice the signed area of the triangle `(a, b, p)`. Zero when `p` lies on
/// the line through `a` and `b`; the sign tells which side it is on.
#[inline]
pub fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Barycentric weights of `p` with respect to triangle `(a, b, c)`.
///
/// Returns `None` for degenerate (zero-area) triangles instead of dividing by
/// zero. Works for either winding.
pub fn barycentric(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> Option<[f32; 3]> {
    let area = edge_function(a, b, c);
    if area.abs() < f32::EPSILON {
        return None;
    }
    Some([
        edge_function(b, c, p) / area,
        edge_function(c, a, p) / area,
        edge_function(a, b, p) / area,
    ])
}

/// Edge function evaluated with the edge's endpoints in a fixed order.
///
/// `E_ab(p) == -E_ba(p)` holds mathematically but not bit-for-bit in floating
/// point. Evaluating every edge from its lexicographically smaller endpoint
/// and negating makes the two triangles sharing an edge agree exactly.
#[inline]
fn oriented_edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    if (a.y, a.x) <= (b.y, b.x) {
        edge_function(a, b, p)
    } else {
        -edge_function(b, a, p)
    }
}

/// Whether samples exactly on edge (a -> b) belong to the triangle.
#[inline]
fn is_top_left(a: Vec2, b: Vec2) -> bool {
    let d = b - a;
    d.y > 0.0 || (d.y == 0.0 && d.x < 0.0)
}

#[inline]
fn covers(value: f32, top_left: bool) -> bool {
    value > 0.0 || (value == 0.0 && top_left)
}

impl FrameBuffer {
    /// Fill the triangle `a, b, c`, coloring each covered pixel with `shader`.
    ///
    /// If all three vertices carry depth (`Vec3`), depth is interpolated with
    /// the barycentric weights and every pixel is depth tested. Degenerate and
    /// clockwise triangles draw nothing. A covered pixel outside the buffer
    /// aborts the fill with the error.
    pub fn fill_triangle<P, S>(&mut self, a: P, b: P, c: P, shader: &S) -> RasterResult
    where
        P: ScreenPoint,
        S: PixelShader + ?Sized,
    {
        let (v0, v1, v2) = (a.position(), b.position(), c.position());

        let area = edge_function(v0, v1, v2);
        if area.abs() < f32::EPSILON {
            log::trace!("skipping degenerate triangle {v0:?} {v1:?} {v2:?}");
            return Ok(());
        }
        if area < 0.0 {
            log::trace!("skipping clockwise triangle {v0:?} {v1:?} {v2:?}");
            return Ok(());
        }
        let inv_area = 1.0 / area;

        let min = v0.min(v1).min(v2).floor().as_pixel();
        let max = v0.max(v1).max(v2).ceil().as_pixel();

        let top_left = [is_top_left(v1, v2), is_top_left(v2, v0), is_top_left(v0, v1)];
        let depths = match (a.depth(), b.depth(), c.depth()) {
            (Some(z0), Some(z1), Some(z2)) => Some([z0, z1, z2]),
            _ => None,
        };

        for y in min.y..max.y {
            for x in min.x..max.x {
                let pixel = Pixel::new(x, y);
                let p = pixel.center();

                // w_i belongs to the edge opposite vertex i
                let w0 = oriented_edge(v1, v2, p);
                let w1 = oriented_edge(v2, v0, p);
                let w2 = oriented_edge(v0, v1, p);

                let inside = covers(w0, top_left[0])
                    && covers(w1, top_left[1])
                    && covers(w2, top_left[2]);
                if !inside {
                    continue;
                }

                let lambda = [w0 * inv_area, w1 * inv_area, w2 * inv_area];
                let depth =
                    depths.map(|z| lambda[0] * z[0] + lambda[1] * z[1] + lambda[2] * z[2]);
                self.plot(pixel, shader.shade(lambda), depth)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use approx::assert_relative_eq;

    use super::*;
    use crate::colors::{Color, BLUE, GREEN, RED};
    use crate::math::Vec3;
    use crate::render::RasterError;

    const BACKGROUND: Color = Color::new(0, 0, 0, 255);

    fn pixels_of(fb: &FrameBuffer, color: Color) -> HashSet<Pixel> {
        let width = fb.width() as usize;
        fb.data()
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == color)
            .map(|(i, _)| Pixel::new((i % width) as i32, (i / width) as i32))
            .collect()
    }

    fn coverage(a: Vec2, b: Vec2, c: Vec2, size: u32) -> HashSet<Pixel> {
        let mut fb = FrameBuffer::new(size, size);
        fb.fill_triangle(a, b, c, &RED).unwrap();
        pixels_of(&fb, RED)
    }

    #[test]
    fn edge_function_sign_follows_side() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.0, 4.0);
        assert!(edge_function(a, b, Vec2::new(1.0, 1.0)) > 0.0);
        assert!(edge_function(a, b, Vec2::new(-1.0, 1.0)) < 0.0);
        assert_eq!(edge_function(a, b, Vec2::new(0.0, 2.0)), 0.0);
    }

    #[test]
    fn fills_expected_pixels_of_right_triangle() {
        let covered = coverage(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(4.0, 0.0),
            8,
        );
        let expected: HashSet<Pixel> = (0..4)
            .flat_map(|y| (0..4).map(move |x| Pixel::new(x, y)))
            .filter(|p| p.x + p.y <= 2)
            .collect();
        assert_eq!(covered, expected);
    }

    #[test]
    fn shared_diagonal_has_no_gaps_or_overlap() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.0, 4.0);
        let c = Vec2::new(4.0, 0.0);
        let d = Vec2::new(4.0, 4.0);

        let first = coverage(a, b, c, 8);
        let second = coverage(c, b, d, 8);

        assert!(first.is_disjoint(&second));
        let union: HashSet<Pixel> = first.union(&second).copied().collect();
        let square: HashSet<Pixel> = (0..4)
            .flat_map(|y| (0..4).map(move |x| Pixel::new(x, y)))
            .collect();
        assert_eq!(union, square);
    }

    #[test]
    fn fan_around_shared_vertex_covers_each_pixel_once() {
        // Four triangles meeting at the center of an 8x8 square, plus an
        // off-grid center to exercise non-axis-aligned shared edges.
        for center in [Vec2::new(4.0, 4.0), Vec2::new(3.3, 4.7)] {
            let corners = [
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 8.0),
                Vec2::new(8.0, 8.0),
                Vec2::new(8.0, 0.0),
            ];
            let mut hits = vec![0u32; 64];
            for i in 0..4 {
                let (p, q) = (corners[i], corners[(i + 1) % 4]);
                let mut fb = FrameBuffer::new(8, 8);
                fb.fill_triangle(center, p, q, &RED).unwrap();
                for (cell, color) in fb.data().iter().enumerate() {
                    if *color == RED {
                        hits[cell] += 1;
                    }
                }
            }
            assert!(hits.iter().all(|&h| h == 1), "center {center:?}: {hits:?}");
        }
    }

    #[test]
    fn clockwise_triangle_is_not_filled() {
        let covered = coverage(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, 4.0),
            8,
        );
        assert!(covered.is_empty());
    }

    #[test]
    fn square_halves_listed_clockwise_are_culled_until_rewound() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(4.0, 0.0);
        let c = Vec2::new(0.0, 4.0);
        let d = Vec2::new(4.0, 4.0);

        // Clockwise on screen: negative area, nothing drawn.
        assert!(coverage(a, b, c, 8).is_empty());
        assert!(coverage(b, d, c, 8).is_empty());

        // The same halves wound the other way tile the square.
        let first = coverage(a, c, b, 8);
        let second = coverage(b, c, d, 8);
        assert!(first.is_disjoint(&second));
        assert_eq!(first.len() + second.len(), 16);
    }

    #[test]
    fn degenerate_triangle_draws_nothing() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.fill_triangle(
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(6.0, 6.0),
            &RED,
        )
        .unwrap();
        assert!(fb.data().iter().all(|&c| c == BACKGROUND));
    }

    #[test]
    fn barycentric_at_vertices_reproduces_vertex_depth() {
        let a = Vec3::new(1.0, 1.0, 0.25);
        let b = Vec3::new(2.0, 9.0, -3.0);
        let c = Vec3::new(7.0, 3.0, 12.5);
        for (vertex, expected) in [(a, a.z), (b, b.z), (c, c.z)] {
            let lambda = barycentric(a.xy(), b.xy(), c.xy(), vertex.xy()).unwrap();
            let depth = lambda[0] * a.z + lambda[1] * b.z + lambda[2] * c.z;
            assert_eq!(depth, expected);
        }
    }

    #[test]
    fn fill_stores_vertex_depth_at_owned_vertex_pixel() {
        // Vertex a sits on the center of pixel (1, 1), where its two top-left
        // edges meet, so the fill owns that pixel.
        let a = Vec3::new(1.5, 1.5, 0.25);
        let b = Vec3::new(1.5, 6.5, -3.0);
        let c = Vec3::new(6.5, 1.5, 12.5);

        let mut fb = FrameBuffer::new(8, 8);
        fb.fill_triangle(a, b, c, &RED).unwrap();

        assert_eq!(fb.get(Pixel::new(1, 1)), Some(RED));
        assert_eq!(fb.depth(Pixel::new(1, 1)), Some(a.z));
    }

    #[test]
    fn barycentric_weights_sum_to_one() {
        let lambda = barycentric(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(2.5, 3.5),
        )
        .unwrap();
        assert_relative_eq!(lambda.iter().sum::<f32>(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(lambda[1], 0.35, epsilon = 1e-6);
        assert_relative_eq!(lambda[2], 0.25, epsilon = 1e-6);
    }

    #[test]
    fn barycentric_of_degenerate_triangle_is_none() {
        let p = Vec2::new(1.0, 1.0);
        assert!(barycentric(p, p, Vec2::new(2.0, 2.0), p).is_none());
    }

    #[test]
    fn depth_is_interpolated_and_tested() {
        let mut fb = FrameBuffer::new(8, 8);
        // Flat far triangle, then a tilted one that is closer on the left.
        fb.fill_triangle(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 8.0, 1.0),
            Vec3::new(8.0, 0.0, 1.0),
            &RED,
        )
        .unwrap();
        fb.fill_triangle(
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(0.0, 8.0, 2.0),
            Vec3::new(8.0, 0.0, 0.0),
            &GREEN,
        )
        .unwrap();

        // Left side: green is at depth ~1.8, in front of red.
        assert_eq!(fb.get(Pixel::new(0, 0)), Some(GREEN));
        // Right tip: green depth ~0.1 is behind red.
        assert_eq!(fb.get(Pixel::new(6, 0)), Some(RED));
        assert_relative_eq!(fb.depth(Pixel::new(6, 0)).unwrap(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(
            fb.depth(Pixel::new(0, 0)).unwrap(),
            2.0 - 2.0 * 0.5 / 8.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn shader_receives_weights_per_vertex() {
        let mut fb = FrameBuffer::new(16, 16);
        let shader = |lambda: [f32; 3]| {
            if lambda[0] >= lambda[1] && lambda[0] >= lambda[2] {
                RED
            } else if lambda[1] >= lambda[2] {
                GREEN
            } else {
                BLUE
            }
        };
        fb.fill_triangle(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 15.0),
            Vec2::new(15.0, 0.0),
            &shader,
        )
        .unwrap();
        assert_eq!(fb.get(Pixel::new(0, 0)), Some(RED));
        assert_eq!(fb.get(Pixel::new(0, 13)), Some(GREEN));
        assert_eq!(fb.get(Pixel::new(13, 0)), Some(BLUE));
    }

    #[test]
    fn covered_pixel_outside_buffer_is_an_error() {
        let mut fb = FrameBuffer::new(4, 4);
        let err = fb
            .fill_triangle(
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 8.0),
                Vec2::new(8.0, 0.0),
                &RED,
            )
            .unwrap_err();
        assert!(matches!(err, RasterError::PixelOutOfBounds { .. }));
    }

    #[test]
    fn triangle_touching_buffer_edge_stays_in_bounds() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_triangle(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(4.0, 4.0),
            &RED,
        )
        .unwrap();
        assert_eq!(fb.get(Pixel::new(0, 3)), Some(RED));
    }
}
