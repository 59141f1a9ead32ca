//! Top-level tab navigation between the exhibit scenarios.
//!
//! The navigator is deliberately the dumbest machine in the crate: any
//! scenario is reachable from any other, there is no terminal state, and
//! the mapping from scenario to renderer is a static table owned by the
//! shell. It holds none of the tools' data.

use crate::core::{LogEntry, TransitionLog};
use crate::state_enum;

state_enum! {
    /// The five top-level views. Exactly one is active at any time.
    pub enum Scenario {
        /// Static landing view
        Landing,
        /// Blue carbon calculator
        Calculator,
        /// Virtual quadrat sampling game
        Quadrat,
        /// Dugong survival timeline
        Crisis,
        /// Restoration simulation wizard
        Restoration,
    }
}

impl Scenario {
    /// Display title shown on the scenario's tab.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Landing => "The Blue Heart",
            Self::Calculator => "The Lab",
            Self::Quadrat => "The Field",
            Self::Crisis => "The Crisis",
            Self::Restoration => "Restoration",
        }
    }
}

impl Copy for Scenario {}

/// Tab order as presented in the navigation bar.
pub const TABS: [Scenario; 5] = [
    Scenario::Landing,
    Scenario::Calculator,
    Scenario::Quadrat,
    Scenario::Crisis,
    Scenario::Restoration,
];

/// Selects which scenario is mounted.
///
/// Lives for the whole session, starting on [`Scenario::Landing`]. Every
/// effective tab switch is appended to a [`TransitionLog`]; re-selecting
/// the active tab is a no-op and records nothing.
#[derive(Clone, Debug)]
pub struct Navigator {
    current: Scenario,
    log: TransitionLog<Scenario>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start a session on the landing view.
    pub fn new() -> Self {
        Self {
            current: Scenario::Landing,
            log: TransitionLog::new(),
        }
    }

    /// The currently mounted scenario.
    pub fn current(&self) -> Scenario {
        self.current
    }

    /// Switch to a scenario. Idempotent: selecting the scenario that is
    /// already active leaves the navigator unchanged.
    pub fn select(&mut self, scenario: Scenario) {
        if scenario == self.current {
            return;
        }
        self.log = self.log.record(LogEntry::now(self.current, scenario));
        self.current = scenario;
    }

    /// Shortcut back to the landing view (the title-banner click).
    pub fn home(&mut self) {
        self.select(Scenario::Landing);
    }

    /// The tab switches driven so far.
    pub fn log(&self) -> &TransitionLog<Scenario> {
        &self.log
    }
}
