//! Getting frames onto the LED data line
//!
//! - [`WireOrder`]: per-pixel byte order
//! - [`Transmitter`]: drains a pixel buffer to a signal channel
//! - [`ChannelArena`]: hands out signal-generator channels

mod arena;
mod transmitter;
mod wire;

pub use arena::{ChannelArena, ChannelHandle, ClaimError, BANK_COUNT, CHANNELS_PER_BANK};
pub use transmitter::Transmitter;
pub use wire::{WireOrder, BYTES_PER_PIXEL};
