//! Compile-time configuration.
//!
//! Library defaults first, then the timing and sizing parameters of the
//! reference UI firmware so they can be tuned in one place.

// Library

/// Slot count of an [`EventQueue`](crate::EventQueue) when none is given.
/// One slot stays reserved, so 7 events can be buffered.
pub const DEFAULT_QUEUE_CAPACITY: usize = 8;

// Reference firmware

/// Slot count of the firmware's button event queue.
pub const UI_QUEUE_CAPACITY: usize = 16;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// How long the splash screen stays up before `SplashTimeout` fires (ms).
pub const SPLASH_DURATION_MS: u64 = 1500;

/// Inactivity on the detail screen before the UI falls back to the menu (ms).
pub const DETAIL_IDLE_TIMEOUT_MS: u64 = 10_000;

/// Main loop period between queue drains (ms).
pub const MAIN_LOOP_POLL_MS: u64 = 10;

/// Number of entries in the firmware's menu screen.
pub const MENU_ITEM_COUNT: usize = 4;

// GPIO pin assignments (nRF52840-DK defaults)
//
// Logical names only; the concrete `embassy_nrf::peripherals::*` pins are
// picked in `main.rs`.  Adjust for a custom board.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button SELECT  → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
