//! RGBA color type and a handful of named colors.

use bytemuck::{Pod, Zeroable};

/// An 8-bit-per-channel RGBA color.
///
/// The layout is `#[repr(C)]` so a slice of colors is also a valid slice of
/// row-major RGBA bytes, which is what image encoders expect.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Maximum value of a single channel.
    pub const CHANNEL_MAX: u8 = u8::MAX;

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Self::CHANNEL_MAX)
    }
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const MAGENTA: Color = Color::rgb(255, 0, 255);

/// Outline color used when wireframes are drawn over filled faces.
pub const WIREFRAME: Color = Color::rgb(0x20, 0x20, 0x20);
