//! Macro for declaring exhibit state enums.

/// Declare a state enum and derive its `State` implementation.
///
/// Generates the standard derives plus a `State` impl whose `name` is the
/// variant identifier. Variants listed after `final:` become terminal.
///
/// # Example
///
/// ```
/// use seagrass_guardian::state_enum;
///
/// state_enum! {
///     pub enum SurveyPhase {
///         Observing,
///         Submitted,
///     }
///     final: [Submitted]
/// }
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

        $(final: [$($final:ident),* $(,)?])?
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

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
