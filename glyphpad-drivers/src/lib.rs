//! Peripheral driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in glyphpad-core:
//!
//! - Text display (SSD1306 OLED over I2C)

#![no_std]
#![deny(unsafe_code)]

pub mod display;
