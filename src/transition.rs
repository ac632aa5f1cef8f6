//! Transition table rows and the table access abstraction.
//!
//! A row reads as "in `curr_state`, on `event`, go to `next_state` and run
//! `handler`":
//! ```text
//! // CURR STATE      EVENT             NEXT STATE       HANDLER
//! { Start,           Any,              Splash,          Some(on_boot)   }
//! { Splash,          SplashTimeout,    Menu,            Some(show_menu) }
//! ```
//! Rows sharing a current state are tried in table order and the first match
//! wins, so specific rows go above wildcard rows.

use crate::state::{Event, State};

/// Handler type for tables whose actions capture their environment.
///
/// Tables of plain functions use the default `fn(E)` handler instead, which
/// is `Sync` and can live in a `static`.
pub type Handler<'a, E> = &'a dyn Fn(E);

/// One `(state, event) -> (state, handler)` rule.
#[derive(Clone, Copy, Debug)]
pub struct Transition<S, E, H = fn(E)> {
    /// State the machine must be in for this row to apply.
    pub curr_state: S,
    /// Event to match; [`Event::ANY`] matches every event.
    pub event: E,
    /// State entered when the row fires.
    pub next_state: S,
    /// Called after the state change with the event that triggered it.
    pub handler: Option<H>,
}

impl<S, E, H> Transition<S, E, H> {
    pub const fn new(curr_state: S, event: E, next_state: S, handler: Option<H>) -> Self {
        Self {
            curr_state,
            event,
            next_state,
            handler,
        }
    }
}

impl<S, E, H> Transition<S, E, H>
where
    S: State,
    E: Event,
    H: Fn(E),
{
    /// Whether this row fires for `event` while the machine is in `state`.
    #[inline]
    pub fn matches(&self, state: S, event: E) -> bool {
        self.curr_state == state && (self.event == event || self.event.is_any())
    }

    /// Run the handler, if any, with the triggering `event`.
    #[inline]
    pub fn fire(&self, event: E) {
        if let Some(handler) = &self.handler {
            handler(event);
        }
    }
}

/// Read access to an ordered, immutable transition table.
///
/// Rows are fetched one at a time by index and returned by value. Arrays of
/// [`Transition`] implement this directly; a table stored somewhere ordinary
/// loads cannot reach (external flash, a separate program-memory space)
/// implements it by copying the requested row out.
pub trait TransitionTable {
    type State: State;
    type Event: Event;
    type Handler: Fn(Self::Event);

    /// Number of rows. Must be non-zero for the table to drive a machine.
    const ROWS: usize;

    /// Fetch row `index`, `0 <= index < ROWS`.
    fn row(&self, index: usize) -> Transition<Self::State, Self::Event, Self::Handler>;
}

impl<S, E, H, const N: usize> TransitionTable for [Transition<S, E, H>; N]
where
    S: State,
    E: Event,
    H: Fn(E) + Copy,
{
    type State = S;
    type Event = E;
    type Handler = H;

    const ROWS: usize = N;

    #[inline]
    fn row(&self, index: usize) -> Transition<S, E, H> {
        self[index]
    }
}
