//! Scoring for the virtual quadrat survey.
//!
//! Pure comparison of a visitor's observation against the reference
//! quadrat. Submission gating lives in the game state machine, not here.

use serde::{Deserialize, Serialize};

/// Allowed deviation, in percentage points, between the estimated and the
/// actual coverage for the estimate to count as correct. The boundary is
/// inclusive.
pub const COVER_TOLERANCE: u8 = 10;

/// Seagrass species offered for identification.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Species {
    /// Enhalus acoroides
    Enhalus,
    /// Halophila ovalis
    Halophila,
}

impl Species {
    /// Scientific name shown on the identification card.
    pub fn scientific_name(&self) -> &'static str {
        match self {
            Self::Enhalus => "Enhalus acoroides",
            Self::Halophila => "Halophila ovalis",
        }
    }

    /// One-line identification hint.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Enhalus => "Long, tape-like leaves",
            Self::Halophila => "Small, oval leaves",
        }
    }
}

/// Ground truth for the presented quadrat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyReference {
    /// Actual coverage percentage of the quadrat
    pub actual_cover: u8,
    /// Species actually pictured
    pub correct_species: Species,
}

impl Default for SurveyReference {
    /// The reference quadrat: 65% cover of Enhalus acoroides.
    fn default() -> Self {
        Self {
            actual_cover: 65,
            correct_species: Species::Enhalus,
        }
    }
}

/// A visitor's observation of the quadrat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAttempt {
    /// Estimated coverage percentage, always within 0..=100
    pub estimated_cover: u8,
    /// Species identification, if one was picked
    pub species: Option<Species>,
}

/// Outcome of comparing an attempt against the reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Estimate within [`COVER_TOLERANCE`] of the actual coverage
    pub within_tolerance: bool,
    /// Identified species matches the reference
    pub species_correct: bool,
}

/// Score an attempt. Total and deterministic; callers are expected to
/// invoke it once the attempt is frozen by submission.
pub fn evaluate(attempt: &SurveyAttempt, reference: &SurveyReference) -> Verdict {
    Verdict {
        within_tolerance: attempt.estimated_cover.abs_diff(reference.actual_cover)
            <= COVER_TOLERANCE,
        species_correct: attempt.species == Some(reference.correct_species),
    }
}
