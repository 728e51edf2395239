//! Frame buffer owning a color array and a parallel depth buffer.
//!
//! Both arrays hold exactly `width * height` cells in row-major order
//! (`index = y * width + x`, row 0 at the top). Every write is bounds checked:
//! an out-of-range write is a caller bug and is reported as a [`RasterError`]
//! instead of being clamped or dropped.
//!
//! # Depth Buffer
//!
//! Larger depth values are closer to the viewer. Cells start at `f32::MIN`, so
//! the first depth-tested write to a cell always lands. A fragment replaces the
//! stored one when its depth is greater than *or equal to* the stored depth, so
//! on an exact tie the most recent write wins.

use thiserror::Error;

use crate::colors::Color;
use crate::math::Pixel;

/// Depth every cell holds before anything has been drawn into it.
pub const CLEAR_DEPTH: f32 = f32::MIN;

/// A write landed outside the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RasterError {
    #[error("pixel index {index} is outside the frame buffer (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} frame buffer")]
    PixelOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

pub type RasterResult<T = ()> = Result<T, RasterError>;

/// An owned grid of colors plus a depth buffer of the same size.
///
/// Dimensions are fixed at construction. Rasterization calls accumulate onto
/// the same buffer; see the line and triangle methods in the sibling modules.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    color_buffer: Vec<Color>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create a buffer with every color opaque black and every depth at [`CLEAR_DEPTH`].
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        log::debug!("allocating {width}x{height} frame buffer ({size} cells)");
        Self {
            color_buffer: vec![Color::default(); size],
            depth_buffer: vec![CLEAR_DEPTH; size],
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

    /// Number of cells, `width * height`.
    pub fn len(&self) -> usize {
        self.color_buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.color_buffer.is_empty()
    }

    /// Raw color data, left to right, top to bottom.
    pub fn data(&self) -> &[Color] {
        &self.color_buffer
    }

    /// The color data viewed as row-major RGBA bytes (4 per pixel).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color_buffer)
    }

    /// Reset every color cell, leaving depths untouched.
    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color);
    }

    /// Reset the depth buffer so the next frame starts with nothing in front.
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(CLEAR_DEPTH);
    }

    /// Get the color at `pixel`, or None if out of bounds.
    pub fn get(&self, pixel: Pixel) -> Option<Color> {
        self.index_of(pixel).ok().map(|idx| self.color_buffer[idx])
    }

    /// Get the stored depth at `pixel`, or None if out of bounds.
    pub fn depth(&self, pixel: Pixel) -> Option<f32> {
        self.index_of(pixel).ok().map(|idx| self.depth_buffer[idx])
    }

    /// Write a color at a linear index, without depth testing.
    #[inline]
    pub fn set(&mut self, index: usize, color: Color) -> RasterResult {
        let cell = self.check_index(index)?;
        self.color_buffer[cell] = color;
        Ok(())
    }

    /// Write a color at a linear index if it is not behind what is already there.
    ///
    /// Returns `Ok(())` both when the fragment lands and when it is occluded.
    #[inline]
    pub fn set_with_depth(&mut self, index: usize, color: Color, depth: f32) -> RasterResult {
        let cell = self.check_index(index)?;
        if depth >= self.depth_buffer[cell] {
            self.depth_buffer[cell] = depth;
            self.color_buffer[cell] = color;
        }
        Ok(())
    }

    /// Write a color at `(x, y)`, without depth testing.
    #[inline]
    pub fn set_point(&mut self, pixel: Pixel, color: Color) -> RasterResult {
        let index = self.index_of(pixel)?;
        self.set(index, color)
    }

    /// Depth-tested write at `(x, y)`. Same rules as [`FrameBuffer::set_with_depth`].
    #[inline]
    pub fn set_point_with_depth(&mut self, pixel: Pixel, color: Color, depth: f32) -> RasterResult {
        let index = self.index_of(pixel)?;
        self.set_with_depth(index, color, depth)
    }

    /// Write with or without a depth test depending on whether a depth is known.
    #[inline]
    pub(crate) fn plot(&mut self, pixel: Pixel, color: Color, depth: Option<f32>) -> RasterResult {
        match depth {
            Some(depth) => self.set_point_with_depth(pixel, color, depth),
            None => self.set_point(pixel, color),
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> RasterResult<usize> {
        if index < self.color_buffer.len() {
            Ok(index)
        } else {
            Err(RasterError::IndexOutOfBounds {
                index,
                len: self.color_buffer.len(),
            })
        }
    }

    /// Row-major index of `pixel`. Coordinates past the right edge are rejected
    /// rather than wrapping onto the next row.
    #[inline]
    fn index_of(&self, pixel: Pixel) -> RasterResult<usize> {
        let inside = pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as u32) < self.width
            && (pixel.y as u32) < self.height;
        if inside {
            Ok(pixel.y as usize * self.width as usize + pixel.x as usize)
        } else {
            Err(RasterError::PixelOutOfBounds {
                x: pixel.x,
                y: pixel.y,
                width: self.width,
                height: self.height,
            })
        }
    }
}
