//! Macros for declaring state enums.

/// Generate a `State` trait implementation for a plain enum.
///
/// # Example
///
/// ```
/// use keypad::core::State;
/// use keypad::state_enum;
///
/// state_enum! {
///     pub enum Door {
///         Open,
///         Closed,
///         Stuck,
///     }
///     error: [Stuck]
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert!(Door::Stuck.is_error());
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

        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
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

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
