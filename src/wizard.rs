//! The restoration simulation wizard.
//!
//! A one-directional walk through three planting decisions, ending in an
//! evaluated outcome. Each choice advances the stage by exactly one; the
//! only way back is `reset`. The renderer always offers exactly the option
//! set for the current stage, so a mismatched pick is a programmer error,
//! not a user-facing failure.

use crate::core::{LogEntry, TransitionLog};
use crate::state_enum;
use serde::{Deserialize, Serialize};

state_enum! {
    /// Stages of the simulation, in walk order.
    pub enum SimStage {
        /// Mission intro, before any choice
        Briefing,
        /// Choosing the planting depth
        DepthSelect,
        /// Choosing the planting method
        MethodSelect,
        /// Choosing the substrate strategy
        SubstrateSelect,
        /// Terminal outcome evaluation
        Debrief,
    }
    final: [Debrief]
}

impl Copy for SimStage {}

impl SimStage {
    /// Position of the stage in the walk, 0 through 4.
    pub fn step_index(&self) -> usize {
        match self {
            Self::Briefing => 0,
            Self::DepthSelect => 1,
            Self::MethodSelect => 2,
            Self::SubstrateSelect => 3,
            Self::Debrief => 4,
        }
    }

    /// Title and prompt for a choice stage; `None` for briefing/debrief.
    pub fn step_info(&self) -> Option<StepInfo> {
        match self {
            Self::DepthSelect => Some(StepInfo {
                title: "Select Planting Depth",
                prompt: "Depth affects light availability and wave energy.",
            }),
            Self::MethodSelect => Some(StepInfo {
                title: "Select Planting Method",
                prompt: "How will you reintroduce the seagrass?",
            }),
            Self::SubstrateSelect => Some(StepInfo {
                title: "Select Substrate Strategy",
                prompt: "The seabed here has high wave energy.",
            }),
            Self::Briefing | Self::Debrief => None,
        }
    }
}

/// Renderer copy for one choice stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepInfo {
    pub title: &'static str,
    pub prompt: &'static str,
}

/// Planting depth options.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Depth {
    Shallow,
    Optimal,
    Deep,
}

impl Depth {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shallow => "< 2 Meters",
            Self::Optimal => "2 - 4 Meters",
            Self::Deep => "> 6 Meters",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::Shallow => "Very high light, high heat",
            Self::Optimal => "Balanced light & temp",
            Self::Deep => "Low light, cold",
        }
    }
}

/// Planting method options.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Method {
    Seeds,
    Sprigs,
}

impl Method {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Seeds => "Seeds",
            Self::Sprigs => "Sprigs / Plugs",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::Seeds => "Low cost, low survival rate",
            Self::Sprigs => "Mature plants, higher success",
        }
    }
}

/// Substrate strategy options.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Substrate {
    Loose,
    Anchored,
}

impl Substrate {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loose => "Loose Sand",
            Self::Anchored => "Anchored (Bamboo)",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::Loose => "Natural planting",
            Self::Anchored => "Secured against waves",
        }
    }
}

/// One choice, tagged with the step it belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Pick {
    Depth(Depth),
    Method(Method),
    Substrate(Substrate),
}

/// Selections accumulated so far, one slot per step in step order. A slot
/// is `None` until its step has been answered.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Choices {
    pub depth: Option<Depth>,
    pub method: Option<Method>,
    pub substrate: Option<Substrate>,
}

/// Evaluated terminal outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    pub narrative: String,
}

impl Outcome {
    /// Result banner headline.
    pub fn headline(&self) -> &'static str {
        if self.success {
            "Success: Meadow Established!"
        } else {
            "Failure: Plants Lost"
        }
    }
}

const SUCCESS_NARRATIVE: &str = "Great job! By selecting Sprigs (hardy), Optimal Depth \
    (good light/temp), and Anchors (protection from waves), your meadow has survived \
    and is thriving.";

const FAILURE_PREAMBLE: &str = "Unfortunately, your conditions weren't right. ";

/// Single-cause failure attribution: the first rule whose predicate
/// matches supplies the reason, even when several choices were jointly
/// suboptimal. Order: depth first, then substrate, then method.
type FailureRule = (fn(&Choices) -> bool, &'static str);

const FAILURE_RULES: &[FailureRule] = &[
    (
        |c| c.depth == Some(Depth::Shallow),
        "The water was too shallow and hot, cooking the plants.",
    ),
    (
        |c| c.depth == Some(Depth::Deep),
        "The water was too deep and dark; photosynthesis failed.",
    ),
    (
        |c| c.substrate == Some(Substrate::Loose),
        "High wave energy washed away the plants because they weren't anchored.",
    ),
    (
        |c| c.method == Some(Method::Seeds),
        "Seeds had a very low germination rate in these rough conditions.",
    ),
];

const FALLBACK_REASON: &str = "The combination of factors led to high mortality.";

fn evaluate(choices: &Choices) -> Outcome {
    let success = choices.depth == Some(Depth::Optimal)
        && choices.method == Some(Method::Sprigs)
        && choices.substrate == Some(Substrate::Anchored);

    if success {
        return Outcome {
            success: true,
            narrative: SUCCESS_NARRATIVE.to_string(),
        };
    }

    let reason = FAILURE_RULES
        .iter()
        .find(|(applies, _)| applies(choices))
        .map(|(_, reason)| *reason)
        .unwrap_or(FALLBACK_REASON);

    Outcome {
        success: false,
        narrative: format!("{FAILURE_PREAMBLE}{reason}"),
    }
}

/// The wizard state machine.
pub struct RestorationSim {
    stage: SimStage,
    choices: Choices,
    log: TransitionLog<SimStage>,
}

impl Default for RestorationSim {
    fn default() -> Self {
        Self::new()
    }
}

impl RestorationSim {
    /// A fresh simulation at the briefing stage with no choices made.
    pub fn new() -> Self {
        Self {
            stage: SimStage::Briefing,
            choices: Choices::default(),
            log: TransitionLog::new(),
        }
    }

    pub fn stage(&self) -> SimStage {
        self.stage
    }

    pub fn choices(&self) -> &Choices {
        &self.choices
    }

    /// Walk progress for the renderer's bar, 0.0 at briefing to 1.0 at
    /// debrief.
    pub fn progress(&self) -> f32 {
        self.stage.step_index() as f32 / SimStage::Debrief.step_index() as f32
    }

    /// The stage transitions driven so far, resets included.
    pub fn log(&self) -> &TransitionLog<SimStage> {
        &self.log
    }

    /// Leave the briefing and present the first choice.
    ///
    /// # Panics
    ///
    /// Panics if the simulation is past the briefing.
    pub fn begin(&mut self) {
        assert!(
            self.stage == SimStage::Briefing,
            "begin() called at stage {:?}",
            self.stage
        );
        self.advance(SimStage::DepthSelect);
    }

    /// Answer the current step and advance exactly one stage.
    ///
    /// # Panics
    ///
    /// Panics if the pick does not belong to the current stage; the
    /// renderer is expected to offer only the current step's options.
    pub fn choose(&mut self, pick: Pick) {
        match (self.stage, pick) {
            (SimStage::DepthSelect, Pick::Depth(depth)) => {
                self.choices.depth = Some(depth);
                self.advance(SimStage::MethodSelect);
            }
            (SimStage::MethodSelect, Pick::Method(method)) => {
                self.choices.method = Some(method);
                self.advance(SimStage::SubstrateSelect);
            }
            (SimStage::SubstrateSelect, Pick::Substrate(substrate)) => {
                self.choices.substrate = Some(substrate);
                self.advance(SimStage::Debrief);
            }
            (stage, pick) => panic!("pick {pick:?} is not valid at stage {stage:?}"),
        }
    }

    /// The evaluated outcome, defined only at the debrief stage.
    ///
    /// Always evaluated fresh over the full selection set.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.stage == SimStage::Debrief {
            Some(evaluate(&self.choices))
        } else {
            None
        }
    }

    /// Back to the briefing with all choices cleared. The only way to
    /// leave the debrief.
    pub fn reset(&mut self) {
        if self.stage != SimStage::Briefing {
            self.log = self.log.record(LogEntry::now(self.stage, SimStage::Briefing));
        }
        self.stage = SimStage::Briefing;
        self.choices = Choices::default();
    }

    fn advance(&mut self, to: SimStage) {
        self.log = self.log.record(LogEntry::now(self.stage, to));
        self.stage = to;
    }
}
