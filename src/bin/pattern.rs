//! Line drawing test pattern.
//!
//! Fills a 1920x1080 buffer with a color gradient, draws a red line across the
//! middle row and fans of lines from the center to every border pixel, then
//! writes `pattern.bmp`.

use rastrs::colors::{self, Color};
use rastrs::math::{Pixel, Vec2};
use rastrs::{export, FrameBuffer};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;
const OUTPUT: &str = "pattern.bmp";

/// Spacing between fan endpoints along each border.
const FAN_STEP: usize = 24;

fn gradient(buffer: &mut FrameBuffer) -> Result<(), rastrs::RasterError> {
    let (w, h) = (buffer.width(), buffer.height());
    for y in 0..h {
        for x in 0..w {
            let color = Color::rgb(
                (x * 255 / w.max(1)) as u8,
                (y * 255 / h.max(1)) as u8,
                ((x + y) * 255 / (w + h).max(1)) as u8,
            );
            buffer.set_point(Pixel::new(x as i32, y as i32), color)?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut buffer = FrameBuffer::new(WIDTH, HEIGHT);
    println!("Drawing {WIDTH}x{HEIGHT} pattern");

    gradient(&mut buffer)?;

    let (right, bottom) = ((WIDTH - 1) as f32, (HEIGHT - 1) as f32);
    let center = Vec2::new(right / 2.0, bottom / 2.0);

    buffer.line(
        Vec2::new(0.0, center.y),
        Vec2::new(right, center.y),
        colors::RED,
    )?;

    for x in (0..WIDTH).step_by(FAN_STEP) {
        let x = x as f32;
        buffer.line(center, Vec2::new(x, 0.0), colors::WHITE)?;
        buffer.line(center, Vec2::new(x, bottom), colors::YELLOW)?;
    }
    for y in (0..HEIGHT).step_by(FAN_STEP) {
        let y = y as f32;
        buffer.line(center, Vec2::new(0.0, y), colors::MAGENTA)?;
        buffer.line(center, Vec2::new(right, y), colors::BLUE)?;
    }

    export::save(&buffer, OUTPUT)?;
    println!("Saved {OUTPUT}");
    Ok(())
}
