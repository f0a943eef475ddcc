//! PIO-based WS2812 signal channel
//!
//! Each bit is a fixed 10-cycle frame on the data pin: high for T1 + T2
//! cycles for a one, high for T1 only for a zero, then low for the rest.
//! The state machine autopulls 8 bits at a time from the top of each FIFO
//! word, so the CPU only pushes bytes and the PIO handles all timing.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::peripherals::{PIO0, PIO1};
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, LoadedProgram, PioPin,
    ShiftConfig, ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use glyphpad_hal::SignalChannel;

use crate::pio::{calc_clock_divider, divider_to_fixed};

/// Cycles the line is high for both bit values
pub const T1: u32 = 2;
/// Extra high cycles for a one
pub const T2: u32 = 5;
/// Low cycles at the end of a zero
pub const T3: u32 = 3;
/// PIO cycles per transmitted bit
pub const CYCLES_PER_BIT: u32 = T1 + T2 + T3;

/// Bits pulled from each FIFO word
const BITS_PER_WORD: u8 = 8;

/// WS2812 program loaded into one PIO block
///
/// Load once per block; every state machine of that block can share it.
pub struct Ws2812Program<'d, PIO: Instance> {
    prg: LoadedProgram<'d, PIO>,
}

impl<'d, PIO: Instance> Ws2812Program<'d, PIO> {
    /// Load the program into the PIO instruction memory
    pub fn load(common: &mut Common<'d, PIO>) -> Self {
        // Delays are T - 1; the instruction itself takes one cycle
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1       side 0 [2]", // T3 low
            "    jmp !x do_zero side 1 [1]", // T1 high
            "    jmp bitloop    side 1 [4]", // T2 high for a one
            "do_zero:",
            "    nop            side 0 [4]", // T2 low for a zero
            ".wrap"
        );

        Self {
            prg: common.load_program(&prg.program),
        }
    }
}

/// One PIO state machine driving a WS2812 data line
pub struct Ws2812Channel<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> Ws2812Channel<'d, PIO, SM> {
    /// Configure `sm` to drive `pin` at `bit_rate_hz` and start it
    pub fn new(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        pin: Peri<'d, impl PioPin>,
        program: &Ws2812Program<'d, PIO>,
        bit_rate_hz: u32,
    ) -> Self {
        let out_pin = common.make_pio_pin(pin);

        let mut cfg = Config::default();
        cfg.use_program(&program.prg, &[&out_pin]);

        let (int_div, frac_div) = calc_clock_divider(clk_sys_freq(), bit_rate_hz, CYCLES_PER_BIT);
        cfg.clock_divider = divider_to_fixed(int_div, frac_div);

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_WORD,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&out_pin]);
        sm.set_enable(true);

        Self { sm }
    }
}

impl<'d, PIO: Instance, const SM: usize> SignalChannel for Ws2812Channel<'d, PIO, SM> {
    fn put_blocking(&mut self, word: u8) {
        // Left shift pulls from bit 31 down
        let fifo_word = (word as u32) << 24;
        while !self.sm.tx().try_push(fifo_word) {
            core::hint::spin_loop();
        }
    }
}

/// LED channel on whichever PIO block had a free state machine
pub enum LedChannel<'d> {
    Pio0(Ws2812Channel<'d, PIO0, 0>),
    Pio1(Ws2812Channel<'d, PIO1, 0>),
}

impl LedChannel<'_> {
    /// PIO block index
    pub fn bank(&self) -> u8 {
        match self {
            LedChannel::Pio0(_) => 0,
            LedChannel::Pio1(_) => 1,
        }
    }
}

impl SignalChannel for LedChannel<'_> {
    fn put_blocking(&mut self, word: u8) {
        match self {
            LedChannel::Pio0(channel) => channel.put_blocking(word),
            LedChannel::Pio1(channel) => channel.put_blocking(word),
        }
    }
}
