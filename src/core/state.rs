//! The `State` trait implemented by every scenario and tool state.
//!
//! States are plain immutable values. Inspecting them never has side
//! effects, and every transition in the crate is an ordinary synchronous
//! update of in-memory state.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for exhibit state values.
///
/// Implementors are small enums: the active scenario tab, the phase of the
/// survey game, the stage of the restoration wizard. All methods are pure.
///
/// # Required Traits
///
/// - `Clone` + `PartialEq`: states are copied into transition logs and
///   compared when deciding whether a transition is a no-op
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: snapshots handed to renderers are plain
///   serializable data
///
/// # Example
///
/// ```rust
/// use seagrass_guardian::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum SurveyPhase {
///     Observing,
///     Submitted,
/// }
///
/// impl State for SurveyPhase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Observing => "Observing",
///             Self::Submitted => "Submitted",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Submitted)
///     }
/// }
///
/// assert!(!SurveyPhase::Observing.is_final());
/// assert!(SurveyPhase::Submitted.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's name for display and logging.
    fn name(&self) -> &str;

    /// Whether this is a terminal state.
    ///
    /// Terminal states only leave via an explicit `reset`; the scenario
    /// machines never advance past one. Defaults to `false`, since some
    /// machines (the tab navigator) have no terminal state at all.
    fn is_final(&self) -> bool {
        false
    }
}
