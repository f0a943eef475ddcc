//! Events consumed by the controller

/// Physical push buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Drives the green indicator
    A,
    /// Drives the blue indicator
    B,
}

impl ButtonId {
    /// Name of the indicator this button toggles
    pub const fn indicator(self) -> &'static str {
        match self {
            ButtonId::A => "Green",
            ButtonId::B => "Blue",
        }
    }
}

/// An accepted button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub button: ButtonId,
    /// Indicator state after the press
    pub on: bool,
    /// Monotonic timestamp of the edge
    pub at_ms: u64,
}

/// Work item for the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Character received on the serial console
    Char(char),
    /// Debounced button press
    Toggled(Transition),
}

impl From<Transition> for Event {
    fn from(transition: Transition) -> Self {
        Event::Toggled(transition)
    }
}
