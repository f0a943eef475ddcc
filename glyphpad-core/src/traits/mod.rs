//! Collaborator traits
//!
//! Pin and signal-channel traits live in `glyphpad-hal`; this module adds
//! the peripherals that are specific to this board's application.

pub mod display;

pub use display::{check_len, DisplayError, TextDisplay, TextDisplayExt};
pub use glyphpad_hal::{OutputPin, SignalChannel};
