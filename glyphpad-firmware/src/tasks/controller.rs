//! Main controller task
//!
//! Sole owner of the LED matrix, indicator pins and OLED. Waits on the event
//! queue and applies one event at a time.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::Delay;

use glyphpad_core::controller::{Controller, Outcome};
use glyphpad_drivers::display::Ssd1306;
use glyphpad_hal_rp2040::gpio::RpOutput;
use glyphpad_hal_rp2040::ws2812::LedChannel;

use crate::channels::EVENTS;

/// OLED on I2C1
pub type OledDisplay = Ssd1306<I2c<'static, I2C1, Blocking>>;

/// Controller wired to the board's peripherals
pub type AppController = Controller<OledDisplay, RpOutput<'static>, LedChannel<'static>, Delay>;

/// Controller task - main event loop
#[embassy_executor::task]
pub async fn controller_task(mut controller: AppController) {
    info!("Controller task started");

    // Matrix may hold garbage from before reset
    controller.clear_matrix();

    loop {
        let event = EVENTS.receive().await;
        let report = controller.handle(event);

        match report.outcome {
            Outcome::Rendered(digit) => info!("Digit {} on matrix", digit.value()),
            Outcome::Echoed(c) => debug!("Non-digit {:?} ignored for matrix", c),
            Outcome::Ignored(c) => trace!("Control character {:?} ignored", c as u32),
            Outcome::Toggled(t) => info!(
                "{} {} at {} ms",
                t.button.indicator(),
                if t.on { "on" } else { "off" },
                t.at_ms
            ),
        }

        if let Err(e) = report.display {
            warn!("Display update failed: {:?}", e);
        }
    }
}
