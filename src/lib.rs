//! Seagrass Guardian: the scenario engine behind a marine conservation
//! exhibit.
//!
//! The exhibit is a set of independent mini-tools under one tab shell: a
//! blue carbon calculator, a quadrat sampling game, a dugong crisis
//! timeline, and a restoration wizard. This crate is their shared state
//! and evaluation core. Rendering, charting, and styling live elsewhere
//! and only consume plain snapshots and transition functions from here.
//!
//! The core is pure: every transition is a synchronous, total update of
//! in-memory state, driven by one visitor's input events in order. The
//! single side effect, persisting the achievement badge, is isolated as
//! an effect over an injectable store in [`badge`].
//!
//! # Core Concepts
//!
//! - **State**: type-safe scenario and tool states via the [`core::State`]
//!   trait and the [`state_enum!`] macro
//! - **Guards**: pure predicates gating mutations (e.g. frozen survey
//!   inputs after submission)
//! - **Transition log**: immutable record of the transitions a visitor
//!   drove
//!
//! # Example
//!
//! ```rust
//! use seagrass_guardian::nav::{Navigator, Scenario};
//! use seagrass_guardian::quadrat::QuadratGame;
//!
//! let mut nav = Navigator::new();
//! nav.select(Scenario::Quadrat);
//!
//! let mut game = QuadratGame::default();
//! game.set_estimate(60);
//! let verdict = game.submit();
//!
//! assert!(verdict.within_tolerance);
//! assert!(game.earned_badge().is_some());
//! ```

pub mod badge;
pub mod calculator;
pub mod core;
pub mod nav;
pub mod quadrat;
pub mod timeline;
pub mod wizard;

// Re-export commonly used types
pub use badge::{award, Badge, BadgeStore};
pub use calculator::{AreaUnit, CarbonCalculator, CarbonEstimate};
pub use self::core::{Guard, LogEntry, State, TransitionLog};
pub use nav::{Navigator, Scenario};
pub use quadrat::{QuadratGame, Verdict};
pub use timeline::{CrisisDataset, TimelineScrubber};
pub use wizard::RestorationSim;
