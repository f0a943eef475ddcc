//! Glyphpad Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the board-agnostic core is
//! written against. Chip-specific crates (currently RP2040) implement them,
//! and host tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  glyphpad-core / glyphpad-firmware      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  glyphpad-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ glyphpad-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Discrete indicator outputs
//! - [`signal::SignalChannel`] - Bit-serial signal generator channel

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod signal;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use signal::SignalChannel;
