//! Board-agnostic core logic for the LED digit matrix
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Digit glyphs, serpentine coordinate mapping and the pixel buffer
//! - Wire encoding and the frame transmitter
//! - Signal-generator channel allocation
//! - Button debouncing
//! - The foreground controller that applies every side effect
//! - Configuration constants and the board pin map

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod input;
pub mod matrix;
pub mod traits;
pub mod transmit;

#[cfg(test)]
pub(crate) mod mock;
