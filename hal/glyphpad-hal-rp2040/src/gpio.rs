//! GPIO output adapter
//!
//! Wraps an embassy-rp `Output` so the core controller can drive it
//! through `glyphpad_hal::OutputPin`.

use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::Peri;
use glyphpad_hal::OutputPin;

/// Push-pull output used for the indicator LEDs
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Configure `pin` as an output, initially low
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
