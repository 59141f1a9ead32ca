//! The virtual quadrat sampling game.
//!
//! A two-phase machine: the visitor adjusts an estimate and picks a
//! species while `Observing`, then `submit` freezes the attempt and scores
//! it. Replay goes through `reset`, which also clears the pending badge
//! request; the persisted flag itself is never deleted.

use crate::badge::Badge;
use crate::core::{Guard, State};
use crate::quadrat::scorer::{evaluate, Species, SurveyAttempt, SurveyReference, Verdict};
use crate::state_enum;

state_enum! {
    /// Lifecycle of one survey attempt.
    pub enum SurveyPhase {
        /// Inputs are live
        Observing,
        /// Attempt is frozen and scored
        Submitted,
    }
    final: [Submitted]
}

impl Copy for SurveyPhase {}

/// Slider position a fresh attempt starts from.
pub const DEFAULT_ESTIMATE: u8 = 50;

/// State machine for the quadrat survey.
pub struct QuadratGame {
    reference: SurveyReference,
    attempt: SurveyAttempt,
    phase: SurveyPhase,
    verdict: Option<Verdict>,
    editable: Guard<SurveyPhase>,
}

impl Default for QuadratGame {
    fn default() -> Self {
        Self::new(SurveyReference::default())
    }
}

impl QuadratGame {
    /// Start a game against the given reference quadrat.
    pub fn new(reference: SurveyReference) -> Self {
        Self {
            reference,
            attempt: SurveyAttempt {
                estimated_cover: DEFAULT_ESTIMATE,
                species: None,
            },
            phase: SurveyPhase::Observing,
            verdict: None,
            editable: Guard::new(|phase: &SurveyPhase| !phase.is_final()),
        }
    }

    pub fn phase(&self) -> SurveyPhase {
        self.phase
    }

    pub fn reference(&self) -> &SurveyReference {
        &self.reference
    }

    /// The attempt as entered so far (frozen once submitted).
    pub fn attempt(&self) -> &SurveyAttempt {
        &self.attempt
    }

    /// Move the coverage slider. Values are clamped to 0..=100; ignored
    /// once the attempt is submitted.
    pub fn set_estimate(&mut self, value: i32) {
        if !self.editable.check(&self.phase) {
            return;
        }
        self.attempt.estimated_cover = value.clamp(0, 100) as u8;
    }

    /// Pick a species identification. Ignored once submitted.
    pub fn pick_species(&mut self, species: Species) {
        if !self.editable.check(&self.phase) {
            return;
        }
        self.attempt.species = Some(species);
    }

    /// Freeze the attempt and score it.
    ///
    /// Scoring is evaluated fresh from the frozen attempt; submitting again
    /// returns the already-computed verdict unchanged.
    pub fn submit(&mut self) -> Verdict {
        if let Some(verdict) = self.verdict {
            return verdict;
        }
        let verdict = evaluate(&self.attempt, &self.reference);
        self.verdict = Some(verdict);
        self.phase = SurveyPhase::Submitted;
        verdict
    }

    /// The verdict, defined only once the attempt is submitted.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// The badge this attempt earned, if any.
    ///
    /// Earned by an in-tolerance estimate alone; species identification
    /// does not gate the badge. The shell persists it by running
    /// [`crate::badge::award`].
    pub fn earned_badge(&self) -> Option<Badge> {
        match self.verdict {
            Some(v) if v.within_tolerance => Some(Badge::JuniorScientist),
            _ => None,
        }
    }

    /// Start over: defaults restored, verdict and pending badge request
    /// cleared. Re-earning the badge re-issues the idempotent write.
    pub fn reset(&mut self) {
        self.attempt = SurveyAttempt {
            estimated_cover: DEFAULT_ESTIMATE,
            species: None,
        };
        self.phase = SurveyPhase::Observing;
        self.verdict = None;
    }
}
