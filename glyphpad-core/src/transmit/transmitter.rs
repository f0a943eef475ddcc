//! Frame transmitter
//!
//! Drains a pixel buffer to a signal channel in strip order, then holds the
//! line idle for the settle time so the LEDs latch.

use embedded_hal::delay::DelayNs;
use glyphpad_hal::SignalChannel;

use super::wire::{WireOrder, BYTES_PER_PIXEL};
use crate::config::{SETTLE_DELAY_US, WIRE_ORDER};
use crate::matrix::PixelBuffer;

/// Sends frames over one exclusively owned channel
pub struct Transmitter<C: SignalChannel, D: DelayNs> {
    channel: C,
    delay: D,
    order: WireOrder,
    settle_us: u32,
}

impl<C: SignalChannel, D: DelayNs> Transmitter<C, D> {
    /// Transmitter with the board's wire order and settle time
    pub fn new(channel: C, delay: D) -> Self {
        Self {
            channel,
            delay,
            order: WIRE_ORDER,
            settle_us: SETTLE_DELAY_US,
        }
    }

    /// Override the colour order
    pub fn with_order(mut self, order: WireOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> WireOrder {
        self.order
    }

    /// Push every pixel, then wait out the settle time
    ///
    /// Blocks while the channel queue is full. Returns the number of words
    /// sent.
    pub fn send<const N: usize>(&mut self, frame: &PixelBuffer<N>) -> usize {
        for pixel in frame.iter() {
            self.channel.put_all(&self.order.encode(*pixel));
        }
        self.delay.delay_us(self.settle_us);
        N * BYTES_PER_PIXEL
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Give back the channel and delay
    pub fn release(self) -> (C, D) {
        (self.channel, self.delay)
    }
}
