//! Fixed-capacity circular event queue.
//!
//! Layout (`N` slots, two cursors):
//! ```text
//!   tail -> oldest unread slot
//!   head -> next slot to write
//!
//!   empty:  head == tail
//!   full:   (head + 1) % N == tail
//! ```
//!
//! One slot is always left unused so that empty and full can be told apart
//! without a separate counter; a queue with `N` slots holds at most `N - 1`
//! events.
//!
//! There is no locking. The queue is meant for one producer (an interrupt
//! handler or a polling site) and one consumer (the main loop) on a single
//! core. If the producer can preempt the consumer, the caller must make
//! `push`/`pop` atomic with respect to each other, e.g. by wrapping the queue
//! in an `embassy_sync` critical-section mutex.

use crate::config::DEFAULT_QUEUE_CAPACITY;
use crate::error::QueueFull;

/// Circular FIFO buffer of `N` slots holding up to `N - 1` values.
#[derive(Clone, Debug)]
pub struct EventQueue<T, const N: usize = DEFAULT_QUEUE_CAPACITY> {
    slots: [Option<T>; N],
    head: usize,
    tail: usize,
}

impl<T: Copy, const N: usize> EventQueue<T, N> {
    /// Create an empty queue.
    ///
    /// Usable in `static` initialisers. `N == 0` is rejected at compile time.
    pub const fn new() -> Self {
        const { assert!(N > 0, "EventQueue needs at least one slot") };
        Self {
            slots: [const { None }; N],
            head: 0,
            tail: 0,
        }
    }

    #[inline]
    const fn advance(cursor: usize) -> usize {
        let next = cursor + 1;
        if next >= N {
            0
        } else {
            next
        }
    }

    /// Append `value` at the write cursor.
    ///
    /// Returns `false` and drops `value` if the queue is full; nothing is
    /// modified in that case.
    pub fn push(&mut self, value: T) -> bool {
        self.try_push(value).is_ok()
    }

    /// Like [`push`](Self::push) but hands a rejected value back.
    pub fn try_push(&mut self, value: T) -> Result<(), QueueFull<T>> {
        let next = Self::advance(self.head);
        if next == self.tail {
            warn!("event queue full ({=usize} slots), dropping event", N);
            return Err(QueueFull(value));
        }

        self.slots[self.head] = Some(value);
        self.head = next;
        Ok(())
    }

    /// Remove and return the oldest value, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.slots[self.tail];
        self.tail = Self::advance(self.tail);
        value
    }

    /// Return the oldest value without removing it.
    pub fn peek(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.tail]
        }
    }

    /// Discard everything buffered. O(1); slot contents are left in place.
    pub fn flush(&mut self) {
        self.tail = self.head;
    }
}

impl<T, const N: usize> EventQueue<T, N> {
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    pub const fn is_full(&self) -> bool {
        let next = if self.head + 1 >= N { 0 } else { self.head + 1 };
        next == self.tail
    }

    /// Number of values currently buffered.
    pub const fn len(&self) -> usize {
        (self.head + N - self.tail) % N
    }

    /// Maximum number of values the queue can hold at once (`N - 1`).
    pub const fn capacity(&self) -> usize {
        N - 1
    }
}

impl<T: Copy, const N: usize> Default for EventQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
