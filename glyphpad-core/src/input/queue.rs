//! Producer side of the controller's event queue
//!
//! Producers wait for room instead of dropping. A press has already flipped
//! its debouncer by the time it is queued, so losing it would leave the
//! indicator pin out of step with the toggle.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;

use super::debounce::Debouncer;
use super::events::{Event, Transition};
use crate::config::EVENT_QUEUE_DEPTH;

/// Bounded queue between the producers and the controller
pub type EventQueue<M> = Channel<M, Event, EVENT_QUEUE_DEPTH>;

/// Queue one character event per received byte, in order
///
/// Console input is ASCII; a byte maps straight to a char.
pub async fn forward_chars<M: RawMutex, const N: usize>(
    bytes: &[u8],
    queue: &Channel<M, Event, N>,
) {
    for &byte in bytes {
        queue.send(Event::Char(char::from(byte))).await;
    }
}

/// Debounce a falling edge and queue the press if it was accepted
///
/// Returns the accepted transition once it is in the queue.
pub async fn forward_press<M: RawMutex, const N: usize>(
    debouncer: &mut Debouncer,
    now_ms: u64,
    queue: &Channel<M, Event, N>,
) -> Option<Transition> {
    let transition = debouncer.on_falling_edge(now_ms)?;
    queue.send(Event::Toggled(transition)).await;
    Some(transition)
}
