//! Table-driven finite-state machine and circular event queue for firmware.
//!
//! Two building blocks, both `no_std` and allocation free:
//!
//! - [`StateMachine`] - advances by matching `(current state, event)` against
//!   a borrowed, immutable [`TransitionTable`] and running the matched row's
//!   handler.
//! - [`EventQueue`] - fixed-capacity single-producer / single-consumer FIFO
//!   that collects events from interrupts or polling sites for the main loop.
//!
//! ```
//! use tablefsm::{event_enum, state_enum, EventQueue, StateMachine, Transition};
//!
//! state_enum! {
//!     pub enum Ui { initial: Start, Splash, Run }
//! }
//! event_enum! {
//!     pub enum UiEvent { any: Any, Timeout }
//! }
//!
//! fn on_start(_: UiEvent) {}
//!
//! static TABLE: [Transition<Ui, UiEvent>; 2] = [
//!     // CURR STATE   EVENT              NEXT STATE   HANDLER
//!     Transition::new(Ui::Start,  UiEvent::Any,     Ui::Splash, Some(on_start)),
//!     Transition::new(Ui::Splash, UiEvent::Timeout, Ui::Run,    None),
//! ];
//!
//! let mut fsm = StateMachine::new(&TABLE);
//! let mut queue: EventQueue<UiEvent> = EventQueue::new();
//!
//! fsm.init();
//! fsm.run_iteration(UiEvent::Any); // runs the START row once
//!
//! queue.push(UiEvent::Timeout);
//! fsm.process_queue(&mut queue);
//! assert_eq!(fsm.state(), Ui::Run);
//! ```
//!
//! Logging goes through `defmt` when the `defmt` feature is on. The
//! reference firmware in `main.rs` builds with `--features embedded`.
//!
//! Usage: `cargo test` runs everything on the host.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod machine;
pub mod queue;
pub mod state;
pub mod transition;

pub use error::{QueueFull, UnknownDiscriminant};
pub use fmt::Loggable;
pub use machine::StateMachine;
pub use queue::EventQueue;
pub use state::{Event, State};
pub use transition::{Handler, Transition, TransitionTable};

// ═══════════════════════════════════════════════════════════════════════════
// Reference firmware logic (host-testable parts)
// ═══════════════════════════════════════════════════════════════════════════

// Lets `ui/menu.rs` name the library the same way the firmware binary does.
#[cfg(test)]
extern crate self as tablefsm;

#[cfg(test)]
#[path = "ui/menu.rs"]
mod ui_menu_impl;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
