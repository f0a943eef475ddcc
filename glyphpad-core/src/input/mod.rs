//! Button input and controller events
//!
//! Each button's edge handler owns a [`Debouncer`]. Accepted presses become
//! [`Transition`]s, which are queued as [`Event`]s next to received
//! characters. Producers wait for room in the queue rather than dropping.

mod debounce;
mod events;
mod queue;

pub use debounce::Debouncer;
pub use events::{ButtonId, Event, Transition};
pub use queue::{forward_chars, forward_press, EventQueue};
