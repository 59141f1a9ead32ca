//! Guard predicates over exhibit states.
//!
//! Guards are pure boolean functions used to gate mutations: the survey
//! game, for example, freezes its inputs once the attempt is submitted.

use super::state::State;
use std::marker::PhantomData;

/// Pure predicate deciding whether an operation is allowed in a state.
///
/// A guard never mutates anything; checking it twice against the same
/// state gives the same answer.
///
/// # Example
///
/// ```rust
/// use seagrass_guardian::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Observing,
///     Submitted,
/// }
///
/// impl State for Phase {
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
/// // Inputs stay editable until the attempt is frozen.
/// let editable = Guard::new(|phase: &Phase| !phase.is_final());
///
/// assert!(editable.check(&Phase::Observing));
/// assert!(!editable.check(&Phase::Submitted));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Evaluate the predicate against a state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}
