//! RP2040-specific HAL for the LED digit matrix firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `glyphpad-hal` traits:
//!
//! - PIO-based WS2812 signal channel (implements `glyphpad_hal::SignalChannel`)
//! - Clock divider math for PIO programs
//! - Indicator output pins (implements `glyphpad_hal::OutputPin`)

#![no_std]

pub mod gpio;
pub mod pio;
pub mod ws2812;

// Re-export shared traits from glyphpad-hal for convenience
pub use glyphpad_hal::{OutputPin, SignalChannel};
