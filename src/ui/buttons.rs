//! GPIO button input with async debouncing.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - UP     - move the menu cursor up
//!   - DOWN   - move the menu cursor down
//!   - SELECT - open the highlighted item / run it
//!
//! Each button runs its own task that waits for a GPIO edge, debounces it
//! and posts the button's `UiEvent` to the shared UI queue.

use crate::ui::{self, menu::UiEvent};
use defmt::debug;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Timer};
use tablefsm::config::BUTTON_DEBOUNCE_MS;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, posts `event`, then
/// waits for release before repeating. A press that finds the queue full is
/// dropped (and counted by `ui::post`).
pub async fn button_task(pin: AnyPin, event: UiEvent) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        btn.wait_for_falling_edge().await;

        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            debug!("Button: {}", event);
            ui::post(event);

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
