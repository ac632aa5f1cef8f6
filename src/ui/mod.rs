//! User interface of the reference firmware - OLED display + physical buttons.
//!
//! Button tasks and timers post [`UiEvent`]s into one shared event queue.
//! The main loop drains it into the UI state machine (see [`menu`]) and
//! redraws the SSD1306 OLED when something visible changed.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 3 tactile switches with debouncing (UP, DOWN, SELECT)
//! - **Menu**: transition table and handlers

pub mod buttons;
pub mod display;
pub mod menu;

use core::cell::RefCell;
use core::sync::atomic::{AtomicU32, Ordering};

use defmt::warn;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use tablefsm::config::UI_QUEUE_CAPACITY;
use tablefsm::EventQueue;

use menu::UiEvent;

/// Queue between event producers (button tasks, timers) and the main loop.
///
/// `EventQueue` does no locking of its own; every access goes through a
/// critical section so a producer can never interleave with the consumer.
static UI_EVENTS: Mutex<CriticalSectionRawMutex, RefCell<EventQueue<UiEvent, UI_QUEUE_CAPACITY>>> =
    Mutex::new(RefCell::new(EventQueue::new()));

/// Events rejected because the queue was full.
static DROPPED_EVENTS: AtomicU32 = AtomicU32::new(0);

/// Queue an event for the main loop. Returns `false` if it was dropped.
pub fn post(event: UiEvent) -> bool {
    let queued = UI_EVENTS.lock(|queue| queue.borrow_mut().push(event));
    if !queued {
        let dropped = DROPPED_EVENTS.fetch_add(1, Ordering::Relaxed) + 1;
        warn!("UI queue full, dropped {} ({} total)", event, dropped);
    }
    queued
}

/// Take the oldest pending event.
pub fn next_event() -> Option<UiEvent> {
    UI_EVENTS.lock(|queue| queue.borrow_mut().pop())
}

pub fn dropped_events() -> u32 {
    DROPPED_EVENTS.load(Ordering::Relaxed)
}
