//! Reveal state and the steps that mutate it

use serde::{Deserialize, Serialize};

use super::sequencer::MountDecision;

/// Number of visual stages in the reveal
pub const STAGE_COUNT: usize = 6;

/// One visual element of the welcome overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Brand logo in the centre
    Logo,
    /// Microscope glyph, top left of the logo
    Microscope,
    /// Laptop glyph, right of the logo
    Laptop,
    /// Gear glyph, bottom right of the logo
    Gear,
    /// Chart glyph, left of the logo
    Chart,
    /// Welcome headline and tagline
    Headline,
}

impl Stage {
    /// All stages in reveal order
    pub const ALL: [Stage; STAGE_COUNT] = [
        Stage::Logo,
        Stage::Microscope,
        Stage::Laptop,
        Stage::Gear,
        Stage::Chart,
        Stage::Headline,
    ];

    /// The four decorations orbiting the logo
    pub const DECORATIONS: [Stage; 4] = [Stage::Microscope, Stage::Laptop, Stage::Gear, Stage::Chart];

    /// Position of this stage in reveal order
    pub fn index(self) -> usize {
        match self {
            Stage::Logo => 0,
            Stage::Microscope => 1,
            Stage::Laptop => 2,
            Stage::Gear => 3,
            Stage::Chart => 4,
            Stage::Headline => 5,
        }
    }

    /// Emoji rendered for decoration stages
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Stage::Microscope => Some("🔬"),
            Stage::Laptop => Some("💻"),
            Stage::Gear => Some("⚙️"),
            Stage::Chart => Some("📈"),
            Stage::Logo | Stage::Headline => None,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Logo => write!(f, "logo"),
            Stage::Microscope => write!(f, "microscope"),
            Stage::Laptop => write!(f, "laptop"),
            Stage::Gear => write!(f, "gear"),
            Stage::Chart => write!(f, "chart"),
            Stage::Headline => write!(f, "headline"),
        }
    }
}

/// Visibility state of the welcome overlay for one mount
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealState {
    /// Whether the overlay renders at all
    pub active: bool,
    /// Whether the exit transition has started
    pub fading_out: bool,
    /// Per-stage visibility, indexed by [`Stage::index`]
    pub stages_shown: [bool; STAGE_COUNT],
}

impl RevealState {
    /// Overlay mounted and visible, no stage shown yet
    pub fn running() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    /// Whether `stage` is currently visible
    pub fn is_shown(&self, stage: Stage) -> bool {
        self.stages_shown[stage.index()]
    }

    /// Stages currently visible, in reveal order
    pub fn shown_stages(&self) -> impl Iterator<Item = Stage> + '_ {
        Stage::ALL.into_iter().filter(|stage| self.is_shown(*stage))
    }

    /// Number of visible stages
    pub fn shown_count(&self) -> usize {
        self.stages_shown.iter().filter(|shown| **shown).count()
    }
}

/// A single mutation on the reveal timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealStep {
    /// Make a stage visible
    Show(Stage),
    /// Start the exit opacity transition
    BeginFadeOut,
    /// Stop rendering the overlay
    Finish,
}

impl RevealStep {
    /// Apply this step to `state`
    pub fn apply(self, state: &mut RevealState) {
        match self {
            RevealStep::Show(stage) => state.stages_shown[stage.index()] = true,
            RevealStep::BeginFadeOut => state.fading_out = true,
            RevealStep::Finish => state.active = false,
        }
    }
}

/// Observable phase of the intro state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    /// Never played for this mount
    Suppressed,
    /// Playing, with this many stages visible
    Running(usize),
    /// Exit transition in progress
    Fading,
    /// Played to completion
    Done,
}

impl IntroPhase {
    /// Derive the phase from a mount decision and the current state
    pub fn of(decision: &MountDecision, state: &RevealState) -> Self {
        if !decision.is_reveal() {
            IntroPhase::Suppressed
        } else if !state.active {
            IntroPhase::Done
        } else if state.fading_out {
            IntroPhase::Fading
        } else {
            IntroPhase::Running(state.shown_count())
        }
    }

    /// Whether the overlay renders anything in this phase
    pub fn is_visible(self) -> bool {
        matches!(self, IntroPhase::Running(_) | IntroPhase::Fading)
    }
}
