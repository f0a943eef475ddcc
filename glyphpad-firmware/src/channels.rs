//! Inter-task communication channels
//!
//! Every producer (serial receive, button edges) feeds one bounded queue.
//! The controller task is the only consumer.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use glyphpad_core::input::EventQueue;

/// Events waiting for the controller
///
/// Producers await room when it is full; nothing is dropped.
pub static EVENTS: EventQueue<CriticalSectionRawMutex> = EventQueue::new();
