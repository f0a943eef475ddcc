//! Serial console receive task
//!
//! Reads characters from UART0 and queues each one for the controller.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use glyphpad_core::input::forward_chars;

use crate::channels::EVENTS;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 16;

/// Serial RX task - one event per received byte
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);
                if EVENTS.is_full() {
                    debug!("Event queue full, waiting for the controller");
                }
                forward_chars(&buf[..n], &EVENTS).await;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
