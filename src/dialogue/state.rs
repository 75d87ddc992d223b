//! Conversation state types

use crate::naming::{GenerationRequest, Style};
use std::fmt;

/// Top-level generation strategy picked from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Random,
    Keywords,
    Example,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Random, Mode::Keywords, Mode::Example];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Random => "random",
            Mode::Keywords => "keywords",
            Mode::Example => "example",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modes that need a style before generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyledMode {
    Random,
    Keywords,
}

impl StyledMode {
    pub fn mode(self) -> Mode {
        match self {
            StyledMode::Random => Mode::Random,
            StyledMode::Keywords => Mode::Keywords,
        }
    }
}

/// Position in the dialogue. Mode and style live in the variants that
/// need them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Main menu shown, or results shown after a generation
    #[default]
    Idle,

    /// Style menu shown for a random or keyword request
    ChoosingStyle { mode: StyledMode },

    /// Waiting for keyword text; mode is keywords
    EnteringKeywords { style: Style },

    /// Waiting for an example track name; mode is example
    EnteringExample,
}

impl Phase {
    /// Stable name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::ChoosingStyle { .. } => "choosing_style",
            Phase::EnteringKeywords { .. } => "entering_keywords",
            Phase::EnteringExample => "entering_example",
        }
    }
}

/// Per-conversation dialogue state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationState {
    pub phase: Phase,
    /// Parameters of the last completed generation, replayed by "generate more"
    pub last_request: Option<GenerationRequest>,
}

impl ConversationState {
    /// Mode of the in-progress request, if one has been picked
    pub fn mode(&self) -> Option<Mode> {
        match &self.phase {
            Phase::Idle => None,
            Phase::ChoosingStyle { mode } => Some(mode.mode()),
            Phase::EnteringKeywords { .. } => Some(Mode::Keywords),
            Phase::EnteringExample => Some(Mode::Example),
        }
    }

    /// Style of the in-progress request, if one has been picked
    pub fn style(&self) -> Option<Style> {
        match &self.phase {
            Phase::EnteringKeywords { style } => Some(*style),
            _ => None,
        }
    }

    #[must_use]
    pub fn with_phase(&self, phase: Phase) -> Self {
        Self {
            phase,
            last_request: self.last_request.clone(),
        }
    }

    /// True when nothing is worth keeping in a store
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}
