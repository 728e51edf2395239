//! Small fixed-size vector kernel used by every rasterization routine.

pub mod pixel;
pub mod vec2;
pub mod vec3;

pub use pixel::Pixel;
pub use vec2::Vec2;
pub use vec3::{normal, Vec3};
