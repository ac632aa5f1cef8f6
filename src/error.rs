//! Error types.
//!
//! We avoid `alloc` - every error carries only fixed-size data, and the
//! rejected value is handed back to the caller instead of being dropped.

use core::fmt;

/// An [`EventQueue`](crate::EventQueue) had no free slot for the value.
///
/// Holds the value that was not enqueued so the caller can count, retry or
/// log the drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull<T>(pub T);

impl<T> QueueFull<T> {
    /// Take back the rejected value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for QueueFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("event queue is full")
    }
}

/// A raw byte did not name any member of a `state_enum!` / `event_enum!`
/// enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownDiscriminant(pub u8);

impl fmt::Display for UnknownDiscriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown discriminant {}", self.0)
    }
}
