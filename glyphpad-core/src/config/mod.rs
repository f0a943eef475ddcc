//! Configuration constants
//!
//! Everything here is fixed at build time. There is no runtime
//! configuration and nothing is persisted across power cycles.

pub mod hardware;

pub use hardware::*;

use smart_leds::RGB8;

use crate::transmit::WireOrder;

/// Side length of the square LED matrix
pub const MATRIX_SIDE: usize = 5;

/// Number of LEDs on the matrix
pub const LED_COUNT: usize = MATRIX_SIDE * MATRIX_SIDE;

/// Minimum spacing between accepted presses of the same button
pub const DEBOUNCE_WINDOW_MS: u64 = 400;

/// WS2812 bit rate
pub const BIT_RATE_HZ: u32 = 800_000;

/// Low time after a frame before the LEDs latch (and before the next frame)
pub const SETTLE_DELAY_US: u32 = 100;

/// Colour byte order expected by the LED's shift register
pub const WIRE_ORDER: WireOrder = WireOrder::Grb;

/// Colour of a lit glyph cell. Red only, kept low to bound current draw.
pub const LIT_COLOR: RGB8 = RGB8 { r: 40, g: 0, b: 0 };

/// Longest string the text display accepts
pub const MAX_TEXT_LEN: usize = 19;

/// Pixel position of the received-character line
pub const CHAR_TEXT_POS: (u8, u8) = (0, 0);

/// Pixel position of the button status line
pub const STATUS_TEXT_POS: (u8, u8) = (0, 10);

/// Depth of the event queue feeding the controller
pub const EVENT_QUEUE_DEPTH: usize = 8;
