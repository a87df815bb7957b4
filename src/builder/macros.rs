//! Macros for typed state and event identifiers.

/// Generate a `State` enum with the derives a state machine needs.
///
/// Variants serialize as their names, so configuration documents can refer
/// to them directly.
///
/// # Example
///
/// ```
/// use retrace::state_enum;
/// use retrace::core::State;
///
/// state_enum! {
///     pub enum Door {
///         Open,
///         Closed,
///         Locked,
///     }
/// }
///
/// assert_eq!(Door::Locked.name(), "Locked");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an `Event` enum with the derives a state machine needs.
///
/// # Example
///
/// ```
/// use retrace::event_enum;
/// use retrace::core::Event;
///
/// event_enum! {
///     pub enum DoorEvent {
///         Push,
///         Pull,
///     }
/// }
///
/// assert_eq!(DoorEvent::Pull.name(), "Pull");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
