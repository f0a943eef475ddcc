//! Test doubles for the collaborator traits

use embedded_hal::delay::DelayNs;
use glyphpad_hal::{OutputPin, SignalChannel};
use heapless::{String, Vec};

use crate::config::MAX_TEXT_LEN;
use crate::traits::{check_len, DisplayError, TextDisplay};

/// One accepted `show` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shown {
    pub text: String<MAX_TEXT_LEN>,
    pub x: u8,
    pub y: u8,
}

/// Display that records what it was asked to show
pub struct MockDisplay {
    pub shown: Vec<Shown, 32>,
    pub fail_with: Option<DisplayError>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            shown: Vec::new(),
            fail_with: None,
        }
    }

    pub fn failing(error: DisplayError) -> Self {
        Self {
            shown: Vec::new(),
            fail_with: Some(error),
        }
    }

    pub fn last_text(&self) -> Option<&str> {
        self.shown.last().map(|s| s.text.as_str())
    }

    pub fn last_pos(&self) -> Option<(u8, u8)> {
        self.shown.last().map(|s| (s.x, s.y))
    }
}

impl TextDisplay for MockDisplay {
    fn show(&mut self, text: &str, x: u8, y: u8) -> Result<(), DisplayError> {
        check_len(text)?;
        if let Some(error) = self.fail_with {
            return Err(error);
        }
        let mut owned = String::new();
        owned.push_str(text).map_err(|_| DisplayError::TextTooLong)?;
        self.shown
            .push(Shown { text: owned, x, y })
            .map_err(|_| DisplayError::Bus)?;
        Ok(())
    }
}

/// Output pin that counts writes
pub struct MockPin {
    pub high: bool,
    pub writes: u32,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            high: false,
            writes: 0,
        }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.writes += 1;
    }

    fn set_low(&mut self) {
        self.high = false;
        self.writes += 1;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Signal channel that keeps every word pushed to it
pub struct RecordingChannel {
    pub words: Vec<u8, 512>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }
}

impl SignalChannel for RecordingChannel {
    fn put_blocking(&mut self, word: u8) {
        // Capacity covers several frames; tests never exceed it
        let _ = self.words.push(word);
    }
}

/// Delay that only adds up the requested time
pub struct MockDelay {
    pub total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { total_ns: 0 }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
