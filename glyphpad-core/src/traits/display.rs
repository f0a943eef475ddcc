//! Text display trait for the status OLED

use crate::config::MAX_TEXT_LEN;

/// Errors that can occur when writing to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transaction failed (I2C NACK, arbitration loss, ...)
    Bus,
    /// Text does not fit on one line
    TextTooLong,
}

/// A small character display
///
/// The display shows one message at a time: every call replaces whatever
/// was on screen before.
pub trait TextDisplay {
    /// Clear the screen and draw `text` with its top-left corner at pixel
    /// (`x`, `y`)
    ///
    /// Text longer than [`MAX_TEXT_LEN`] characters is rejected with
    /// [`DisplayError::TextTooLong`] and the screen is left untouched.
    fn show(&mut self, text: &str, x: u8, y: u8) -> Result<(), DisplayError>;
}

/// Convenience helpers over [`TextDisplay`]
pub trait TextDisplayExt: TextDisplay {
    /// Show text at a position pair, e.g. [`crate::config::STATUS_TEXT_POS`]
    fn show_at(&mut self, text: &str, pos: (u8, u8)) -> Result<(), DisplayError> {
        self.show(text, pos.0, pos.1)
    }
}

impl<T: TextDisplay> TextDisplayExt for T {}

/// Check `text` against the line length limit
pub fn check_len(text: &str) -> Result<(), DisplayError> {
    if text.chars().count() > MAX_TEXT_LEN {
        Err(DisplayError::TextTooLong)
    } else {
        Ok(())
    }
}
