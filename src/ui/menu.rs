//! UI state machine of the reference firmware.
//!
//! Screen flow:
//! ```text
//! Start --Any--> Splash --SplashTimeout--> Menu --Select--> Detail
//!                                           ^ |               |
//!                                           +-+ Up/Down       |
//!                                           ^                 |
//!                                           +--Select (run)---+
//!                                           +--anything else--+
//! ```
//!
//! Handlers are plain `fn`s so the table can be a `static`; what they change
//! (cursor position, activation count) lives in atomics read back by the
//! render loop.

use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use tablefsm::config::MENU_ITEM_COUNT;
use tablefsm::{event_enum, state_enum, Transition};

state_enum! {
    /// Screens the UI can be on.
    pub enum UiState {
        /// Power-on; left immediately by the boot kick.
        initial: Start,
        Splash,
        Menu,
        Detail,
    }
}

event_enum! {
    /// Inputs to the UI machine, produced by buttons and timers.
    pub enum UiEvent {
        /// Wildcard; also used as the boot kick.
        any: Any,
        SplashTimeout,
        Up,
        Down,
        Select,
        Back,
    }
}

/// Labels shown on the menu screen.
pub const MENU_ITEMS: [&str; MENU_ITEM_COUNT] = ["Status", "Counter", "Display", "About"];

static MENU_CURSOR: AtomicUsize = AtomicUsize::new(0);
static ACTIVATIONS: AtomicU32 = AtomicU32::new(0);

#[rustfmt::skip]
pub static UI_TRANSITIONS: [Transition<UiState, UiEvent>; 7] = [
    // CURR STATE          EVENT                    NEXT STATE          HANDLER
    Transition::new(UiState::Start,  UiEvent::Any,           UiState::Splash, Some(on_boot)),
    Transition::new(UiState::Splash, UiEvent::SplashTimeout, UiState::Menu,   None),
    Transition::new(UiState::Menu,   UiEvent::Up,            UiState::Menu,   Some(on_move)),
    Transition::new(UiState::Menu,   UiEvent::Down,          UiState::Menu,   Some(on_move)),
    Transition::new(UiState::Menu,   UiEvent::Select,        UiState::Detail, None),
    Transition::new(UiState::Detail, UiEvent::Select,        UiState::Menu,   Some(on_activate)),
    Transition::new(UiState::Detail, UiEvent::Any,           UiState::Menu,   None),
];

fn on_boot(_: UiEvent) {
    MENU_CURSOR.store(0, Ordering::Relaxed);
}

// One handler for both directions; the triggering event tells them apart.
fn on_move(event: UiEvent) {
    let cursor = MENU_CURSOR.load(Ordering::Relaxed);
    let next = match event {
        UiEvent::Up => select_prev(cursor),
        UiEvent::Down => select_next(cursor, MENU_ITEM_COUNT),
        _ => cursor,
    };
    MENU_CURSOR.store(next, Ordering::Relaxed);
}

fn on_activate(_: UiEvent) {
    ACTIVATIONS.fetch_add(1, Ordering::Relaxed);
}

/// Move the menu cursor one item up.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Move the menu cursor one item down, stopping at the last item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        selected
    }
}

/// Index of the highlighted menu item.
pub fn menu_cursor() -> usize {
    MENU_CURSOR.load(Ordering::Relaxed)
}

/// How many times a menu item has been run from the detail screen.
pub fn activations() -> u32 {
    ACTIVATIONS.load(Ordering::Relaxed)
}

#[cfg(test)]
pub fn reset_menu() {
    MENU_CURSOR.store(0, Ordering::Relaxed);
    ACTIVATIONS.store(0, Ordering::Relaxed);
}
