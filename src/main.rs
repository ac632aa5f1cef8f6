//! Reference UI firmware for the nRF52840-DK.
//!
//! Three buttons feed a table-driven UI state machine through an event
//! queue; the current screen is drawn on an SSD1306 OLED.
//!
//! Build: `cargo build --release --features embedded --target thumbv7em-none-eabihf`

#![no_std]
#![no_main]

mod ui;

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Duration, Instant, Timer};
use panic_probe as _;
use tablefsm::config::{DETAIL_IDLE_TIMEOUT_MS, MAIN_LOOP_POLL_MS, SPLASH_DURATION_MS};
use tablefsm::StateMachine;

use ui::menu::{UiEvent, UiState, UI_TRANSITIONS};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::task(pool_size = 3)]
async fn button(pin: AnyPin, event: UiEvent) {
    ui::buttons::button_task(pin, event).await
}

#[embassy_executor::task]
async fn splash_timer() {
    Timer::after(Duration::from_millis(SPLASH_DURATION_MS)).await;
    ui::post(UiEvent::SplashTimeout);
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("tablefsm-ui starting");

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut display = ui::display::init(i2c);

    let mut fsm = StateMachine::new(&UI_TRANSITIONS);
    fsm.init();
    // Kick the machine out of Start; the wildcard row runs the boot handler.
    fsm.run_iteration(UiEvent::Any);

    spawner.must_spawn(button(p.P0_11.degrade(), UiEvent::Up));
    spawner.must_spawn(button(p.P0_12.degrade(), UiEvent::Down));
    spawner.must_spawn(button(p.P0_24.degrade(), UiEvent::Select));
    spawner.must_spawn(splash_timer());

    let mut shown: Option<(UiState, usize, u32)> = None;
    let mut last_input = Instant::now();

    loop {
        while let Some(event) = ui::next_event() {
            last_input = Instant::now();
            fsm.run_iteration(event);
        }

        if fsm.state() == UiState::Detail
            && last_input.elapsed() >= Duration::from_millis(DETAIL_IDLE_TIMEOUT_MS)
        {
            ui::post(UiEvent::Back);
        }

        let view = (fsm.state(), ui::menu::menu_cursor(), ui::menu::activations());
        if shown != Some(view) {
            let (state, cursor, activations) = view;
            info!(
                "UI: {} cursor={} runs={} dropped={}",
                state,
                cursor,
                activations,
                ui::dropped_events()
            );
            ui::display::render(&mut display, state, cursor, activations);
            shown = Some(view);
        }

        Timer::after(Duration::from_millis(MAIN_LOOP_POLL_MS)).await;
    }
}
