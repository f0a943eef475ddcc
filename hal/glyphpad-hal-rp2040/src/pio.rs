//! PIO clock configuration
//!
//! PIO programs run at SYS_CLK / divider. A bit-serial protocol that spends
//! a fixed number of PIO cycles per bit therefore needs
//! divider = SYS_CLK / (bit_rate * cycles_per_bit).
//!
//! The RP2040 divider is 16.8 fixed point: 16 integer bits and 8
//! fractional bits.

use fixed::types::U24F8;

/// System clock frequency (RP2040 default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// Calculate the clock divider for a bit-serial program
///
/// Returns (integer_part, fractional_part) for the 16.8 fixed-point divider.
/// A zero rate gives the maximum divider.
pub fn calc_clock_divider(sys_clk_hz: u32, bit_rate_hz: u32, cycles_per_bit: u32) -> (u16, u8) {
    let divisor = bit_rate_hz as u64 * cycles_per_bit as u64;
    if divisor == 0 {
        return (0xFFFF, 0xFF);
    }

    // Multiply by 256 first to keep 8 fractional bits
    let divider_x256 = (sys_clk_hz as u64 * 256) / divisor;

    if divider_x256 > 0xFFFF_FF {
        return (0xFFFF, 0xFF);
    }

    // Hardware treats 0 as 65536; anything below 1.0 is clamped up
    if divider_x256 < 256 {
        return (1, 0);
    }

    ((divider_x256 / 256) as u16, (divider_x256 % 256) as u8)
}

/// Pack a divider into the form the state machine config takes
pub fn divider_to_fixed(int_part: u16, frac_part: u8) -> U24F8 {
    U24F8::from_bits(((int_part as u32) << 8) | frac_part as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ws2812_divider() {
        // 125 MHz / (800 kHz * 10) = 15.625
        let (int_part, frac_part) = calc_clock_divider(SYS_CLK_HZ, 800_000, 10);
        assert_eq!(int_part, 15);
        assert_eq!(frac_part, 160);
    }

    #[test]
    fn test_exact_divider() {
        // 125 MHz / (1 MHz * 5) = 25
        assert_eq!(calc_clock_divider(SYS_CLK_HZ, 1_000_000, 5), (25, 0));
    }

    #[test]
    fn test_zero_rate_is_max() {
        assert_eq!(calc_clock_divider(SYS_CLK_HZ, 0, 10), (0xFFFF, 0xFF));
        assert_eq!(calc_clock_divider(SYS_CLK_HZ, 800_000, 0), (0xFFFF, 0xFF));
    }

    #[test]
    fn test_too_fast_clamped() {
        assert_eq!(calc_clock_divider(SYS_CLK_HZ, 100_000_000, 10), (1, 0));
    }

    #[test]
    fn test_too_slow_clamped() {
        assert_eq!(calc_clock_divider(SYS_CLK_HZ, 1, 1), (0xFFFF, 0xFF));
    }

    #[test]
    fn test_fixed_packing() {
        let div = divider_to_fixed(15, 160);
        assert_eq!(div.to_bits(), (15 << 8) | 160);
        assert_eq!(div, U24F8::from_num(15.625));
    }
}
