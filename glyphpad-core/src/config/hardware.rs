//! Board pin map
//!
//! Pin numbers for the RP2040 board the firmware targets. The firmware
//! takes the matching typed peripherals; this table is the single place
//! the wiring is written down.

/// Pin configuration with optional inversion and pull-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an active-low input with pull-up (push button to ground)
    pub const fn button(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// All pins used by the firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardPins {
    /// WS2812 matrix data line
    pub led_data: PinConfig,
    /// Button A (toggles the green indicator)
    pub button_a: PinConfig,
    /// Button B (toggles the blue indicator)
    pub button_b: PinConfig,
    /// Green indicator LED
    pub green: PinConfig,
    /// Blue indicator LED
    pub blue: PinConfig,
    /// Red indicator LED (held off)
    pub red: PinConfig,
    /// OLED I2C data
    pub i2c_sda: PinConfig,
    /// OLED I2C clock
    pub i2c_scl: PinConfig,
    /// Serial console TX
    pub uart_tx: PinConfig,
    /// Serial console RX
    pub uart_rx: PinConfig,
}

impl BoardPins {
    /// Wiring of the reference board
    pub const DEFAULT: Self = Self {
        led_data: PinConfig::new(7),
        button_a: PinConfig::button(5),
        button_b: PinConfig::button(6),
        green: PinConfig::new(11),
        blue: PinConfig::new(12),
        red: PinConfig::new(13),
        i2c_sda: PinConfig::new(14),
        i2c_scl: PinConfig::new(15),
        uart_tx: PinConfig::new(0),
        uart_rx: PinConfig::new(1),
    };

    /// All pin numbers in declaration order
    pub const fn numbers(&self) -> [u8; 10] {
        [
            self.led_data.pin,
            self.button_a.pin,
            self.button_b.pin,
            self.green.pin,
            self.blue.pin,
            self.red.pin,
            self.i2c_sda.pin,
            self.i2c_scl.pin,
            self.uart_tx.pin,
            self.uart_rx.pin,
        ]
    }

    /// Check that no GPIO is assigned twice
    pub fn is_conflict_free(&self) -> bool {
        let numbers = self.numbers();
        numbers
            .iter()
            .enumerate()
            .all(|(i, pin)| !numbers[i + 1..].contains(pin))
    }
}

impl Default for BoardPins {
    fn default() -> Self {
        Self::DEFAULT
    }
}
