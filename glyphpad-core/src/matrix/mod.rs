//! Digit rendering onto the LED matrix
//!
//! Rendering only touches the pixel buffer; sending the frame is the
//! transmitter's job.

mod buffer;
mod glyph;
mod mapping;

pub use buffer::{PixelBuffer, BLACK};
pub use glyph::{Digit, Glyph, GLYPHS};
pub use mapping::{MatrixMap, SerpentineMap};

use smart_leds::RGB8;

use crate::config::LED_COUNT;

/// Frame buffer sized for the digit matrix
pub type MatrixBuffer = PixelBuffer<LED_COUNT>;

/// Clear `buffer` and light the cells of `digit` in `color`
pub fn render_digit(buffer: &mut MatrixBuffer, digit: Digit, color: RGB8) {
    buffer.clear();
    for (x, y) in digit.glyph().lit_cells() {
        if let Some(index) = MatrixMap::index(x, y) {
            buffer.set(index, color);
        }
    }
}
