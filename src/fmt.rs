//! Logging shims.
//!
//! With the `defmt` feature the macros forward to `defmt`; without it they
//! expand to nothing.

#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($( & $x ),*);
        }
    };
}

/// Bound satisfied by every value the library may log.
///
/// Resolves to `defmt::Format` when the `defmt` feature is enabled and to
/// nothing otherwise.
#[cfg(feature = "defmt")]
pub trait Loggable: defmt::Format {}

#[cfg(feature = "defmt")]
impl<T: defmt::Format + ?Sized> Loggable for T {}

/// Bound satisfied by every value the library may log.
///
/// Resolves to `defmt::Format` when the `defmt` feature is enabled and to
/// nothing otherwise.
#[cfg(not(feature = "defmt"))]
pub trait Loggable {}

#[cfg(not(feature = "defmt"))]
impl<T: ?Sized> Loggable for T {}
