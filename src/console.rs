//! Printing a frame buffer to a true-color ANSI terminal.
//!
//! Each cell becomes one `█` glyph colored with a `38;2;r;g;b` foreground
//! escape. Alpha is ignored.

use std::io::{self, Write};

use crate::colors::Color;
use crate::render::FrameBuffer;

const BLOCK: &str = "\u{2588}";

/// Switch the foreground color.
pub fn set_color<W: Write>(out: &mut W, color: Color) -> io::Result<()> {
    write!(out, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Clear the screen and move the cursor home.
pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(b"\x1b[2J\x1b[1;1H")
}

/// Restore default attributes.
pub fn reset<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(b"\x1b[0;00m")
}

/// Clear the terminal and draw `buffer` one row per line.
pub fn write_buffer<W: Write>(out: &mut W, buffer: &FrameBuffer) -> io::Result<()> {
    clear(out)?;
    let width = buffer.width() as usize;
    if width > 0 {
        for row in buffer.data().chunks_exact(width) {
            for &color in row {
                set_color(out, color)?;
                out.write_all(BLOCK.as_bytes())?;
            }
            out.write_all(b"\n")?;
        }
    }
    reset(out)?;
    out.flush()
}
