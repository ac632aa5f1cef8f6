//! Property-based tests for the machine and the queue.
//!
//! Machines use raw `u8` states and events (0 = initial / wildcard) so
//! tables can be generated freely.

use std::cell::RefCell;
use std::collections::VecDeque;

use proptest::prelude::*;
use tablefsm::{EventQueue, Handler, StateMachine, Transition};

const STATES: u8 = 6;
const EVENTS: u8 = 5;

type Calls = RefCell<Vec<(usize, u8)>>;

prop_compose! {
    fn arbitrary_row()(curr in 0..STATES, event in 0..EVENTS, next in 0..STATES) -> (u8, u8, u8) {
        (curr, event, next)
    }
}

/// Reference first-match lookup over plain tuples.
fn expected(rows: &[(u8, u8, u8)], state: u8, event: u8) -> Option<(usize, u8)> {
    rows.iter()
        .enumerate()
        .find(|(_, (c, e, _))| *c == state && (*e == event || *e == 0))
        .map(|(i, (_, _, n))| (i, *n))
}

#[derive(Clone, Debug)]
enum QueueOp {
    Push(u8),
    Pop,
    Flush,
}

fn queue_op() -> impl Strategy<Value = QueueOp> {
    prop_oneof![
        4 => any::<u8>().prop_map(QueueOp::Push),
        3 => Just(QueueOp::Pop),
        1 => Just(QueueOp::Flush),
    ]
}

proptest! {
    #[test]
    fn run_iteration_follows_first_match(
        rows in prop::collection::vec(arbitrary_row(), 8),
        events in prop::collection::vec(0..EVENTS, 1..20),
    ) {
        let calls = Calls::default();
        let calls_ref = &calls;
        // Same closure type for every row, tagged with the row index.
        let make = |i: usize| move |e: u8| calls_ref.borrow_mut().push((i, e));
        let handlers: Vec<_> = (0..8).map(make).collect();

        let table: [Transition<u8, u8, Handler<'_, u8>>; 8] = core::array::from_fn(|i| {
            let (curr, event, next) = rows[i];
            Transition::new(curr, event, next, Some(&handlers[i] as Handler<'_, u8>))
        });
        let mut fsm = StateMachine::new(&table);

        for event in events {
            let before = fsm.state();
            let calls_before = calls.borrow().len();
            let fired = fsm.run_iteration(event);

            match expected(&rows, before, event) {
                Some((index, next)) => {
                    prop_assert!(fired);
                    prop_assert_eq!(fsm.state(), next);
                    prop_assert_eq!(calls.borrow().len(), calls_before + 1);
                    prop_assert_eq!(calls.borrow()[calls_before], (index, event));
                }
                None => {
                    prop_assert!(!fired);
                    prop_assert_eq!(fsm.state(), before);
                    prop_assert_eq!(calls.borrow().len(), calls_before);
                }
            }
        }
    }

    #[test]
    fn state_without_rows_never_moves(event in 0..EVENTS) {
        // No row starts in state 5.
        let table: [Transition<u8, u8>; 3] = [
            Transition::new(0, 0, 5, None),
            Transition::new(1, 2, 3, None),
            Transition::new(3, 0, 1, None),
        ];
        let mut fsm = StateMachine::new(&table);
        fsm.run_iteration(1);
        prop_assert_eq!(fsm.state(), 5);

        prop_assert!(!fsm.run_iteration(event));
        prop_assert_eq!(fsm.state(), 5);
    }

    #[test]
    fn specific_row_before_wildcard_wins(state in 1..STATES, event in 1..EVENTS) {
        let table: [Transition<u8, u8>; 3] = [
            Transition::new(0, 0, state, None),
            Transition::new(state, event, 100, None),
            Transition::new(state, 0, 200, None),
        ];
        let mut fsm = StateMachine::new(&table);
        fsm.run_iteration(0);
        prop_assert_eq!(fsm.state(), state);

        fsm.run_iteration(event);
        prop_assert_eq!(fsm.state(), 100);
    }

    #[test]
    fn init_is_idempotent(events in prop::collection::vec(0..EVENTS, 0..10), repeats in 1..4usize) {
        let fired = RefCell::new(0usize);
        let h: Handler<'_, u8> = &|_| *fired.borrow_mut() += 1;
        let table = [
            Transition::new(0u8, 0u8, 1, Some(h)),
            Transition::new(1, 0, 2, Some(h)),
            Transition::new(2, 3, 0, Some(h)),
        ];
        let mut fsm = StateMachine::new(&table);
        for event in events {
            fsm.run_iteration(event);
        }

        let before = *fired.borrow();
        for _ in 0..repeats {
            fsm.init();
            prop_assert_eq!(fsm.state(), 0);
        }
        prop_assert_eq!(*fired.borrow(), before);
    }

    #[test]
    fn queue_matches_bounded_fifo_model(ops in prop::collection::vec(queue_op(), 0..64)) {
        let mut queue: EventQueue<u8, 5> = EventQueue::new();
        let mut model: VecDeque<u8> = VecDeque::new();

        for op in ops {
            match op {
                QueueOp::Push(v) => {
                    let accepted = queue.push(v);
                    prop_assert_eq!(accepted, model.len() < 4);
                    if accepted {
                        model.push_back(v);
                    }
                }
                QueueOp::Pop => prop_assert_eq!(queue.pop(), model.pop_front()),
                QueueOp::Flush => {
                    queue.flush();
                    model.clear();
                }
            }

            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.is_full(), model.len() == 4);
            prop_assert_eq!(queue.peek(), model.front().copied());
        }
    }
}
