//! Transition logging for the interactive scenarios.
//!
//! The navigator and the restoration wizard keep an append-only record of
//! the transitions a visitor drove them through. The log is observational
//! only; nothing in the crate replays or rewinds it.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single logged transition between two states.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LogEntry<S: State> {
    /// The state left behind
    pub from: S,
    /// The state entered
    pub to: S,
    /// When the transition happened
    pub at: DateTime<Utc>,
}

impl<S: State> LogEntry<S> {
    /// Record a transition stamped with the current time.
    pub fn now(from: S, to: S) -> Self {
        Self {
            from,
            to,
            at: Utc::now(),
        }
    }
}

/// Ordered, append-only log of state transitions.
///
/// `record` is pure: it returns a new log and leaves the receiver
/// untouched.
///
/// # Example
///
/// ```rust
/// use seagrass_guardian::core::{LogEntry, State, TransitionLog};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Tab {
///     Landing,
///     Lab,
/// }
///
/// impl State for Tab {
///     fn name(&self) -> &str {
///         match self {
///             Self::Landing => "Landing",
///             Self::Lab => "Lab",
///         }
///     }
/// }
///
/// let log = TransitionLog::new();
/// let log = log.record(LogEntry::now(Tab::Landing, Tab::Lab));
///
/// assert_eq!(log.entries().len(), 1);
/// assert_eq!(log.path(), vec![&Tab::Landing, &Tab::Lab]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    entries: Vec<LogEntry<S>>,
}

impl<S: State> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionLog<S> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, returning the extended log.
    pub fn record(&self, entry: LogEntry<S>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// All entries in the order they were recorded.
    pub fn entries(&self) -> &[LogEntry<S>] {
        &self.entries
    }

    /// The sequence of states visited: the first entry's `from`, then the
    /// `to` of every entry. Empty if nothing was recorded.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.entries.first() {
            path.push(&first.from);
        }
        for entry in &self.entries {
            path.push(&entry.to);
        }
        path
    }

    /// Wall-clock span from the first to the last recorded transition.
    ///
    /// `None` until at least one entry exists.
    pub fn duration(&self) -> Option<Duration> {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => {
                last.at.signed_duration_since(first.at).to_std().ok()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Tab {
        Landing,
        Lab,
        Field,
    }

    impl State for Tab {
        fn name(&self) -> &str {
            match self {
                Self::Landing => "Landing",
                Self::Lab => "Lab",
                Self::Field => "Field",
            }
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log: TransitionLog<Tab> = TransitionLog::new();
        assert!(log.entries().is_empty());
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_leaves_original_untouched() {
        let log = TransitionLog::new();
        let extended = log.record(LogEntry::now(Tab::Landing, Tab::Lab));

        assert_eq!(log.entries().len(), 0);
        assert_eq!(extended.entries().len(), 1);
    }

    #[test]
    fn path_chains_states_in_order() {
        let log = TransitionLog::new()
            .record(LogEntry::now(Tab::Landing, Tab::Lab))
            .record(LogEntry::now(Tab::Lab, Tab::Field));

        assert_eq!(log.path(), vec![&Tab::Landing, &Tab::Lab, &Tab::Field]);
    }

    #[test]
    fn duration_exists_once_recorded() {
        let log = TransitionLog::new().record(LogEntry::now(Tab::Landing, Tab::Field));
        assert!(log.duration().is_some());
    }

    #[test]
    fn log_roundtrips_through_json() {
        let log = TransitionLog::new().record(LogEntry::now(Tab::Landing, Tab::Lab));

        let json = serde_json::to_string(&log).unwrap();
        let back: TransitionLog<Tab> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.entries().len(), log.entries().len());
        assert_eq!(back.path(), log.path());
    }
}
