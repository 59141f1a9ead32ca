//! Virtual quadrat sampling: the coverage-estimation game and its scorer.

pub mod game;
pub mod scorer;

pub use game::{QuadratGame, SurveyPhase, DEFAULT_ESTIMATE};
pub use scorer::{evaluate, Species, SurveyAttempt, SurveyReference, Verdict, COVER_TOLERANCE};
