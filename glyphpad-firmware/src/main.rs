//! Glyphpad - LED digit matrix firmware
//!
//! Main firmware binary for RP2040 boards. Digits typed on the serial
//! console are drawn on a 5x5 WS2812 matrix; two push buttons toggle the
//! green and blue indicator LEDs. The OLED shows what happened last.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{PIO0, PIO1, UART0};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use glyphpad_core::config::{BoardPins, BIT_RATE_HZ};
use glyphpad_core::controller::Controller;
use glyphpad_core::input::ButtonId;
use glyphpad_core::transmit::{ChannelArena, Transmitter};
use glyphpad_drivers::display::Ssd1306;
use glyphpad_hal_rp2040::gpio::RpOutput;
use glyphpad_hal_rp2040::ws2812::{LedChannel, Ws2812Channel, Ws2812Program};

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
    PIO1_IRQ_0 => PioInterruptHandler<PIO1>;
});

/// UART0 baud rate
const CONSOLE_BAUD: u32 = 115_200;

/// OLED I2C clock
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// State machines the LED matrix may use: SM0 of PIO0, else SM0 of PIO1
const PIO_FREE_MASKS: [u8; 2] = [0b0001, 0b0001];

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Glyphpad firmware starting...");

    let pins = BoardPins::DEFAULT;
    if !pins.is_conflict_free() {
        defmt::panic!("Board pin map assigns a GPIO twice");
    }

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Serial console on UART0 (GP0 TX, GP1 RX)
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = CONSOLE_BAUD;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    info!("UART initialized at {} baud", CONSOLE_BAUD);

    // OLED on I2C1 (GP14 SDA, GP15 SCL)
    let i2c_config = {
        let mut cfg = i2c::Config::default();
        cfg.frequency = I2C_FREQUENCY_HZ;
        cfg
    };
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut display = Ssd1306::new(i2c);
    match display.init() {
        Ok(()) => info!("OLED initialized"),
        Err(e) => warn!("OLED init failed: {:?}", e),
    }

    // LED matrix data on GP7, driven by the first free PIO state machine
    let mut arena = ChannelArena::with_free_masks(PIO_FREE_MASKS);
    let handle = match arena.claim() {
        Ok(handle) => handle,
        Err(e) => defmt::panic!("No PIO state machine for the LED matrix: {:?}", e),
    };

    // With the fixed masks above the claim lands on PIO0. The PIO1 arm keeps
    // the matrix working if a later board change takes SM0 of PIO0.
    let led_channel = match handle.bank() {
        0 => {
            let Pio {
                mut common, sm0, ..
            } = Pio::new(p.PIO0, Irqs);
            let program = Ws2812Program::load(&mut common);
            LedChannel::Pio0(Ws2812Channel::new(
                &mut common,
                sm0,
                p.PIN_7,
                &program,
                BIT_RATE_HZ,
            ))
        }
        _ => {
            let Pio {
                mut common, sm0, ..
            } = Pio::new(p.PIO1, Irqs);
            let program = Ws2812Program::load(&mut common);
            LedChannel::Pio1(Ws2812Channel::new(
                &mut common,
                sm0,
                p.PIN_7,
                &program,
                BIT_RATE_HZ,
            ))
        }
    };

    info!(
        "LED matrix on PIO{} SM{}",
        led_channel.bank(),
        handle.index()
    );

    // Indicators: green GP11, blue GP12, red GP13 unused and held low
    let green = RpOutput::new(p.PIN_11);
    let blue = RpOutput::new(p.PIN_12);
    let _red = Output::new(p.PIN_13, Level::Low);

    // Buttons: A on GP5, B on GP6, active low
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);

    let controller = Controller::new(
        display,
        green,
        blue,
        Transmitter::new(led_channel, Delay),
    );

    // Spawn tasks
    spawner.spawn(tasks::controller_task(controller)).unwrap();
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();
    spawner
        .spawn(tasks::button_task(button_a, ButtonId::A))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button_b, ButtonId::B))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Keeps the UART TX half, the red pin and the channel handle alive
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!(
            "Main loop heartbeat, {} events queued",
            channels::EVENTS.len()
        );
    }
}
