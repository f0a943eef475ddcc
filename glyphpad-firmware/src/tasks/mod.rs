//! Embassy async tasks
//!
//! Producers feed the event queue; the controller task applies the events.

pub mod buttons;
pub mod controller;
pub mod serial_rx;

pub use buttons::button_task;
pub use controller::{controller_task, AppController, OledDisplay};
pub use serial_rx::serial_rx_task;
