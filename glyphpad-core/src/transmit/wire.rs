//! Colour byte order on the wire

use smart_leds::RGB8;

/// Words sent per pixel
pub const BYTES_PER_PIXEL: usize = 3;

/// Order in which an LED's shift register expects colour components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WireOrder {
    /// Green, red, blue (WS2812B)
    #[default]
    Grb,
    /// Red, green, blue (WS2811 and some clones)
    Rgb,
}

impl WireOrder {
    /// Bytes for one pixel, first-sent first
    pub const fn encode(self, pixel: RGB8) -> [u8; BYTES_PER_PIXEL] {
        match self {
            WireOrder::Grb => [pixel.g, pixel.r, pixel.b],
            WireOrder::Rgb => [pixel.r, pixel.g, pixel.b],
        }
    }
}
