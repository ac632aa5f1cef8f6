//! State and event vocabulary shared by tables and machines.
//!
//! Both are small closed enumerations. Each reserves one named member:
//!
//! - [`State::INITIAL`] - where [`StateMachine::init`](crate::StateMachine::init)
//!   puts the machine.
//! - [`Event::ANY`] - the wildcard; a row carrying it matches every event
//!   once its state matches.
//!
//! The [`state_enum!`](crate::state_enum) and [`event_enum!`](crate::event_enum)
//! macros declare such enumerations as `#[repr(u8)]` with the reserved member
//! named explicitly and pinned to discriminant `0`.

use crate::fmt::Loggable;

/// A machine state.
pub trait State: Copy + Eq + Loggable {
    /// The state a machine starts in and returns to on `init()`.
    const INITIAL: Self;

    fn is_initial(&self) -> bool {
        *self == Self::INITIAL
    }
}

/// A stimulus that may trigger a transition.
pub trait Event: Copy + Eq + Loggable {
    /// Wildcard event. In a table row it matches any supplied event.
    const ANY: Self;

    fn is_any(&self) -> bool {
        *self == Self::ANY
    }
}

/// Raw one-byte states; `0` is the initial state.
impl State for u8 {
    const INITIAL: Self = 0;
}

/// Raw one-byte events; `0` is the wildcard.
impl Event for u8 {
    const ANY: Self = 0;
}

/// Declare a `#[repr(u8)]` state enumeration implementing [`State`].
///
/// The member after `initial:` becomes [`State::INITIAL`] with discriminant
/// `0`; the remaining members follow in declaration order.
///
/// ```
/// use tablefsm::{state_enum, State};
///
/// state_enum! {
///     pub enum Screen {
///         initial: Boot,
///         Splash,
///         Run,
///     }
/// }
///
/// assert_eq!(Screen::INITIAL, Screen::Boot);
/// assert_eq!(Screen::Boot.as_u8(), 0);
/// assert_eq!(Screen::try_from(2), Ok(Screen::Run));
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])*
            initial: $first:ident
            $(,
                $(#[$variant_meta:meta])*
                $variant:ident
            )* $(,)?
        }
    ) => {
        $crate::__small_enum! {
            $(#[$meta])*
            $vis enum $name {
                $(#[$first_meta])* $first
                $(, $(#[$variant_meta])* $variant)*
            }
        }

        impl $crate::State for $name {
            const INITIAL: Self = Self::$first;
        }
    };
}

/// Declare a `#[repr(u8)]` event enumeration implementing [`Event`].
///
/// The member after `any:` becomes the wildcard [`Event::ANY`] with
/// discriminant `0`.
///
/// ```
/// use tablefsm::{event_enum, Event};
///
/// event_enum! {
///     pub enum Input {
///         any: Any,
///         Timeout,
///         Click,
///     }
/// }
///
/// assert!(Input::Any.is_any());
/// assert_eq!(Input::Click.name(), "Click");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])*
            any: $first:ident
            $(,
                $(#[$variant_meta:meta])*
                $variant:ident
            )* $(,)?
        }
    ) => {
        $crate::__small_enum! {
            $(#[$meta])*
            $vis enum $name {
                $(#[$first_meta])* $first
                $(, $(#[$variant_meta])* $variant)*
            }
        }

        impl $crate::Event for $name {
            const ANY: Self = Self::$first;
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __small_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])* $first:ident
            $(, $(#[$variant_meta:meta])* $variant:ident)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        #[repr(u8)]
        $vis enum $name {
            $(#[$first_meta])*
            $first = 0,
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        #[allow(dead_code)]
        impl $name {
            /// Every member, in declaration order.
            pub const VARIANTS: &'static [Self] = &[Self::$first $(, Self::$variant)*];

            pub const fn as_u8(self) -> u8 {
                self as u8
            }

            pub const fn name(self) -> &'static str {
                match self {
                    Self::$first => stringify!($first),
                    $(Self::$variant => stringify!($variant),)*
                }
            }
        }

        impl ::core::convert::TryFrom<u8> for $name {
            type Error = $crate::UnknownDiscriminant;

            fn try_from(raw: u8) -> ::core::result::Result<Self, Self::Error> {
                Self::VARIANTS
                    .iter()
                    .copied()
                    .find(|v| v.as_u8() == raw)
                    .ok_or($crate::UnknownDiscriminant(raw))
            }
        }

        impl ::core::convert::From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }

        $crate::__impl_format!($name);
    };
}

#[cfg(feature = "defmt")]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_format {
    ($name:ident) => {
        impl defmt::Format for $name {
            fn format(&self, f: defmt::Formatter) {
                defmt::write!(f, "{=str}", self.name())
            }
        }
    };
}

#[cfg(not(feature = "defmt"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_format {
    ($name:ident) => {};
}
