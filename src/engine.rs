//! Drawing whole models into a frame buffer.
//!
//! [`render_model`] projects every face of a [`Model`] and rasterizes it
//! according to a [`RenderMode`]. Face colors come from a caller-supplied
//! random source so renders are reproducible from a seed.

use rand::Rng;

use crate::colors::{self, Color};
use crate::model::Model;
use crate::projection::OrthoProjection;
use crate::render::{FrameBuffer, RasterResult};

/// Rendering mode presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Triangle outlines only, each in its own random color
    Wireframe,
    /// Filled triangles, depth tested
    #[default]
    Filled,
    /// Filled triangles with a dark outline on top
    FilledWireframe,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Wireframe => write!(f, "wireframe"),
            RenderMode::Filled => write!(f, "filled"),
            RenderMode::FilledWireframe => write!(f, "filled+wireframe"),
        }
    }
}

/// Summary of one [`render_model`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Faces handed to the rasterizer.
    pub faces: usize,
}

/// A random fully opaque color.
pub fn random_color<R: Rng>(rng: &mut R) -> Color {
    Color::rgb(rng.gen(), rng.gen(), rng.gen())
}

/// Project and draw every face of `model` into `buffer`.
///
/// The projection must map the model inside the buffer; the first pixel that
/// lands outside aborts the render with the error. Pixels drawn before that
/// point stay in the buffer.
pub fn render_model<R: Rng>(
    buffer: &mut FrameBuffer,
    model: &Model,
    projection: &OrthoProjection,
    mode: RenderMode,
    rng: &mut R,
) -> RasterResult<RenderStats> {
    let mut stats = RenderStats::default();

    for face in model.faces() {
        let [a, b, c] = face.map(|v| projection.project(v));
        let color = random_color(rng);

        match mode {
            RenderMode::Wireframe => buffer.triangle(a, b, c, color)?,
            RenderMode::Filled => buffer.fill_triangle(a, b, c, &color)?,
            RenderMode::FilledWireframe => {
                buffer.fill_triangle(a, b, c, &color)?;
                buffer.triangle(a, b, c, colors::WIREFRAME)?;
            }
        }
        stats.faces += 1;
    }

    log::debug!("rendered {} faces ({mode})", stats.faces);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::math::{Pixel, Vec3};

    fn square() -> Model {
        // Two counter-clockwise faces covering the unit square
        Model::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
        .unwrap()
    }

    fn render(mode: RenderMode, seed: u64) -> FrameBuffer {
        let model = square();
        let (min, max) = model.bounds().unwrap();
        let mut buffer = FrameBuffer::new(17, 17);
        let projection = OrthoProjection::fit(min, max, buffer.width(), buffer.height());
        let mut rng = StdRng::seed_from_u64(seed);
        let stats = render_model(&mut buffer, &model, &projection, mode, &mut rng).unwrap();
        assert_eq!(stats.faces, 2);
        buffer
    }

    #[test]
    fn same_seed_same_image() {
        assert_eq!(
            render(RenderMode::Filled, 7).data(),
            render(RenderMode::Filled, 7).data()
        );
    }

    #[test]
    fn filled_square_covers_interior() {
        let buffer = render(RenderMode::Filled, 1);
        let background = Color::default();
        for y in 0..16 {
            for x in 0..16 {
                assert_ne!(buffer.get(Pixel::new(x, y)), Some(background), "({x}, {y})");
            }
        }
    }

    #[test]
    fn wireframe_leaves_interior_empty() {
        let buffer = render(RenderMode::Wireframe, 1);
        assert_eq!(buffer.get(Pixel::new(4, 4)), Some(Color::default()));
        assert_ne!(buffer.get(Pixel::new(0, 8)), Some(Color::default()));
    }

    #[test]
    fn outline_drawn_over_fill() {
        let buffer = render(RenderMode::FilledWireframe, 3);
        assert_eq!(buffer.get(Pixel::new(0, 8)), Some(colors::WIREFRAME));
    }

    #[test]
    fn out_of_bounds_projection_is_reported() {
        let model = square();
        let mut buffer = FrameBuffer::new(8, 8);
        let projection = OrthoProjection::fit(Vec3::ZERO, Vec3::ONE, 16, 16);
        let mut rng = StdRng::seed_from_u64(0);
        let result = render_model(
            &mut buffer,
            &model,
            &projection,
            RenderMode::Filled,
            &mut rng,
        );
        assert!(result.is_err());
    }
}
