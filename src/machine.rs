//! Table-driven state machine engine.
//!
//! The machine owns nothing but its current state. The transition table is
//! borrowed for `'t`, so it must outlive the machine; typically both are
//! `static` for the life of the firmware.
//!
//! Each call to [`StateMachine::run_iteration`] scans the table top to bottom
//! and takes the first row whose current state matches and whose event either
//! equals the supplied event or is the wildcard. At most one transition
//! happens per call. No matching row is not an error: the call does nothing.

use crate::queue::EventQueue;
use crate::state::State;
use crate::transition::TransitionTable;

/// A finite-state machine driven by a borrowed [`TransitionTable`].
pub struct StateMachine<'t, T: TransitionTable> {
    table: &'t T,
    state: T::State,
}

impl<'t, T: TransitionTable> StateMachine<'t, T> {
    /// Bind a machine to `table`. The table is referenced, not copied.
    ///
    /// The machine starts in [`State::INITIAL`]. An empty table is a compile
    /// error.
    pub const fn new(table: &'t T) -> Self {
        const { assert!(T::ROWS > 0, "transition table must have at least one row") };
        Self {
            table,
            state: T::State::INITIAL,
        }
    }

    /// Reset to [`State::INITIAL`]. No handler runs.
    pub fn init(&mut self) {
        debug!("fsm: init -> {}", T::State::INITIAL);
        self.state = T::State::INITIAL;
    }

    pub fn state(&self) -> T::State {
        self.state
    }

    pub fn table(&self) -> &'t T {
        self.table
    }

    /// Feed one event to the machine.
    ///
    /// On the first matching row the state changes to the row's next state
    /// and then the row's handler, if any, is called with `event` itself (not
    /// the row's event, which may be the wildcard). Returns whether a
    /// transition happened.
    pub fn run_iteration(&mut self, event: T::Event) -> bool {
        for index in 0..T::ROWS {
            let row = self.table.row(index);
            if !row.matches(self.state, event) {
                continue;
            }

            trace!(
                "fsm: {} --{}--> {} (row {=usize})",
                self.state,
                event,
                row.next_state,
                index
            );
            self.state = row.next_state;
            row.fire(event);
            return true;
        }

        trace!("fsm: no transition for {} in {}", event, self.state);
        false
    }

    /// Drain `queue` into the machine, oldest event first.
    ///
    /// Returns how many events were consumed.
    pub fn process_queue<const N: usize>(&mut self, queue: &mut EventQueue<T::Event, N>) -> usize {
        let mut consumed = 0;
        while let Some(event) = queue.pop() {
            self.run_iteration(event);
            consumed += 1;
        }
        consumed
    }
}

impl<T: TransitionTable> core::fmt::Debug for StateMachine<'_, T>
where
    T::State: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StateMachine")
            .field("state", &self.state)
            .field("rows", &T::ROWS)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{Handler, Transition};
    use crate::{event_enum, state_enum};
    use core::cell::RefCell;
    use heapless::Vec;

    state_enum! {
        enum Door {
            initial: Closed,
            Open,
            Locked,
            Alarm,
        }
    }

    event_enum! {
        enum Input {
            any: Any,
            Push,
            Pull,
            Key,
        }
    }

    type Calls = RefCell<Vec<(u8, Input), 8>>;

    fn record(calls: &Calls, tag: u8, event: Input) {
        calls.borrow_mut().push((tag, event)).unwrap();
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        static TABLE: [Transition<Door, Input>; 1] =
            [Transition::new(Door::Closed, Input::Push, Door::Open, None)];
        let fsm = StateMachine::new(&TABLE);
        assert_eq!(fsm.state(), Door::Closed);
    }

    #[test]
    fn exact_match_transitions_and_calls_handler_once() {
        let calls = Calls::default();
        let h: Handler<'_, Input> = &|e| record(&calls, 1, e);
        let table: [Transition<Door, Input, Handler<'_, Input>>; 1] =
            [Transition::new(Door::Closed, Input::Push, Door::Open, Some(h))];
        let mut fsm = StateMachine::new(&table);

        assert!(fsm.run_iteration(Input::Push));
        assert_eq!(fsm.state(), Door::Open);
        assert_eq!(calls.borrow().as_slice(), &[(1, Input::Push)]);
    }

    #[test]
    fn no_matching_row_is_silent_noop() {
        let calls = Calls::default();
        let h: Handler<'_, Input> = &|e| record(&calls, 1, e);
        let table: [Transition<Door, Input, Handler<'_, Input>>; 1] =
            [Transition::new(Door::Closed, Input::Push, Door::Open, Some(h))];
        let mut fsm = StateMachine::new(&table);

        assert!(!fsm.run_iteration(Input::Pull));
        assert!(!fsm.run_iteration(Input::Any));
        assert_eq!(fsm.state(), Door::Closed);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn wildcard_row_passes_actual_event_to_handler() {
        let calls = Calls::default();
        let h: Handler<'_, Input> = &|e| record(&calls, 7, e);
        let table: [Transition<Door, Input, Handler<'_, Input>>; 1] =
            [Transition::new(Door::Closed, Input::Any, Door::Alarm, Some(h))];
        let mut fsm = StateMachine::new(&table);

        assert!(fsm.run_iteration(Input::Key));
        assert_eq!(fsm.state(), Door::Alarm);
        assert_eq!(calls.borrow().as_slice(), &[(7, Input::Key)]);
    }

    #[test]
    fn earlier_row_wins_over_later_wildcard() {
        let calls = Calls::default();
        let specific: Handler<'_, Input> = &|e| record(&calls, 1, e);
        let wildcard: Handler<'_, Input> = &|e| record(&calls, 2, e);
        let table: [Transition<Door, Input, Handler<'_, Input>>; 2] = [
            Transition::new(Door::Closed, Input::Key, Door::Locked, Some(specific)),
            Transition::new(Door::Closed, Input::Any, Door::Alarm, Some(wildcard)),
        ];
        let mut fsm = StateMachine::new(&table);

        fsm.run_iteration(Input::Key);
        assert_eq!(fsm.state(), Door::Locked);
        assert_eq!(calls.borrow().as_slice(), &[(1, Input::Key)]);
    }

    #[test]
    fn earlier_wildcard_shadows_later_specific_row() {
        let table: [Transition<Door, Input>; 2] = [
            Transition::new(Door::Closed, Input::Any, Door::Alarm, None),
            Transition::new(Door::Closed, Input::Key, Door::Locked, None),
        ];
        let mut fsm = StateMachine::new(&table);

        fsm.run_iteration(Input::Key);
        assert_eq!(fsm.state(), Door::Alarm);
    }

    #[test]
    fn at_most_one_transition_per_call() {
        // Closed -> Open -> Locked would chain if the scan continued.
        let table: [Transition<Door, Input>; 2] = [
            Transition::new(Door::Closed, Input::Push, Door::Open, None),
            Transition::new(Door::Open, Input::Push, Door::Locked, None),
        ];
        let mut fsm = StateMachine::new(&table);

        fsm.run_iteration(Input::Push);
        assert_eq!(fsm.state(), Door::Open);
        fsm.run_iteration(Input::Push);
        assert_eq!(fsm.state(), Door::Locked);
    }

    #[test]
    fn init_resets_without_calling_handlers() {
        let calls = Calls::default();
        let h: Handler<'_, Input> = &|e| record(&calls, 1, e);
        let table: [Transition<Door, Input, Handler<'_, Input>>; 1] =
            [Transition::new(Door::Closed, Input::Push, Door::Open, Some(h))];
        let mut fsm = StateMachine::new(&table);

        fsm.run_iteration(Input::Push);
        assert_eq!(fsm.state(), Door::Open);

        fsm.init();
        assert_eq!(fsm.state(), Door::Closed);
        fsm.init();
        assert_eq!(fsm.state(), Door::Closed);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn process_queue_drains_in_fifo_order() {
        let calls = Calls::default();
        let h: Handler<'_, Input> = &|e| record(&calls, 0, e);
        let table: [Transition<Door, Input, Handler<'_, Input>>; 3] = [
            Transition::new(Door::Closed, Input::Push, Door::Open, Some(h)),
            Transition::new(Door::Open, Input::Pull, Door::Closed, Some(h)),
            Transition::new(Door::Closed, Input::Key, Door::Locked, Some(h)),
        ];
        let mut fsm = StateMachine::new(&table);
        let mut queue: EventQueue<Input, 8> = EventQueue::new();
        queue.push(Input::Push);
        queue.push(Input::Pull);
        queue.push(Input::Key);
        queue.push(Input::Push); // no row from Locked

        assert_eq!(fsm.process_queue(&mut queue), 4);
        assert!(queue.is_empty());
        assert_eq!(fsm.state(), Door::Locked);
        assert_eq!(
            calls.borrow().as_slice(),
            &[(0, Input::Push), (0, Input::Pull), (0, Input::Key)]
        );
    }

    #[test]
    fn process_queue_on_empty_queue() {
        let table: [Transition<Door, Input>; 1] =
            [Transition::new(Door::Closed, Input::Push, Door::Open, None)];
        let mut fsm = StateMachine::new(&table);
        let mut queue: EventQueue<Input> = EventQueue::new();
        assert_eq!(fsm.process_queue(&mut queue), 0);
        assert_eq!(fsm.state(), Door::Closed);
    }

    /// Table kept as packed bytes, decoded one row at a time.
    struct PackedTable {
        bytes: [[u8; 3]; 2],
    }

    impl TransitionTable for PackedTable {
        type State = u8;
        type Event = u8;
        type Handler = fn(u8);

        const ROWS: usize = 2;

        fn row(&self, index: usize) -> Transition<u8, u8> {
            let [curr, event, next] = self.bytes[index];
            Transition::new(curr, event, next, None)
        }
    }

    #[test]
    fn custom_row_source_drives_machine() {
        let table = PackedTable {
            bytes: [[0, 0, 1], [1, 5, 2]],
        };
        let mut fsm = StateMachine::new(&table);
        assert!(fsm.run_iteration(3));
        assert_eq!(fsm.state(), 1);
        assert!(!fsm.run_iteration(4));
        assert!(fsm.run_iteration(5));
        assert_eq!(fsm.state(), 2);
    }
}
