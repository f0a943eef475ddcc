//! Button edge tasks
//!
//! One task per button. Each awaits falling edges, runs its own debouncer
//! and queues accepted presses for the controller. Nothing here touches an
//! output.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use glyphpad_core::input::{forward_press, ButtonId, Debouncer};

use crate::channels::EVENTS;

/// Button task - debounces one button
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut input: Input<'static>, button: ButtonId) {
    info!("Button {} task started", button);

    let mut debouncer = Debouncer::new(button);

    loop {
        input.wait_for_falling_edge().await;
        let now_ms = Instant::now().as_millis();

        // Waits for queue room; the toggle is already committed
        match forward_press(&mut debouncer, now_ms, &EVENTS).await {
            Some(transition) => {
                debug!("Button {} accepted at {} ms, on={}", button, now_ms, transition.on);
            }
            None => trace!("Button {} bounce at {} ms", button, now_ms),
        }
    }
}
