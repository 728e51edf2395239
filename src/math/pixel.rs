//! Integer pixel coordinates.

use super::vec2::Vec2;

/// Integer 2D coordinate addressing one cell of a frame buffer.
///
/// `(0, 0)` is the top-left corner; `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const ZERO: Self = Self::new(0, 0);
    pub const MIN: Self = Self::new(i32::MIN, i32::MIN);
    pub const MAX: Self = Self::new(i32::MAX, i32::MAX);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Center of the pixel square in continuous screen space.
    pub fn center(self) -> Vec2 {
        Vec2::new(self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}
