//! Pure state transition function

use super::effect::{Delivery, Effect};
use super::event::{Callback, Event};
use super::state::{ConversationState, Mode, Phase, StyledMode};
use super::view;
use crate::naming::GenerationRequest;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ConversationState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ConversationState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Events that are not valid in the current phase
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Button {callback} is not valid while {phase}")]
    UnexpectedButton {
        phase: &'static str,
        callback: Callback,
    },
    #[error("Text message is not expected while {phase}")]
    UnexpectedText { phase: &'static str },
    #[error("Nothing to regenerate yet")]
    NothingToRegenerate,
}

impl TransitionError {
    /// Delivery for re-displaying the current prompt after a rejection
    pub fn redisplay_delivery(&self) -> Delivery {
        match self {
            TransitionError::UnexpectedText { .. } => Delivery::Send,
            TransitionError::UnexpectedButton { .. } | TransitionError::NothingToRegenerate => {
                Delivery::Edit
            }
        }
    }
}

/// Pure transition function: given the same state and event it always
/// produces the same result, with no I/O.
pub fn transition(
    state: &ConversationState,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (&state.phase, event) {
        // Start and back-to-main reset everything from any phase
        (_, Event::Start) => Ok(TransitionResult::new(ConversationState::default())
            .with_effect(Effect::Reply(view::welcome()))),

        (_, Event::Button(Callback::BackToMain)) => {
            Ok(TransitionResult::new(ConversationState::default())
                .with_effect(Effect::Reply(view::main_menu(Delivery::Edit))))
        }

        (_, Event::Help) => {
            Ok(TransitionResult::new(state.clone()).with_effect(Effect::Reply(view::help())))
        }

        // Generate more replays the stored request; state is untouched
        (_, Event::Button(Callback::GenerateMore)) => match &state.last_request {
            Some(request) => Ok(TransitionResult::new(state.clone())
                .with_effect(Effect::regenerate(request.clone()))),
            None => Err(TransitionError::NothingToRegenerate),
        },

        // Mode selection from the main menu
        (Phase::Idle, Event::Button(Callback::Mode(mode))) => {
            let phase = match mode {
                Mode::Example => Phase::EnteringExample,
                Mode::Random => Phase::ChoosingStyle {
                    mode: StyledMode::Random,
                },
                Mode::Keywords => Phase::ChoosingStyle {
                    mode: StyledMode::Keywords,
                },
            };
            let new_state = state.with_phase(phase);
            let reply = view::prompt_for(&new_state.phase, Delivery::Edit);
            Ok(TransitionResult::new(new_state).with_effect(Effect::Reply(reply)))
        }

        // Style selection
        (Phase::ChoosingStyle { mode }, Event::Button(Callback::Style(style))) => match mode {
            StyledMode::Random => Ok(TransitionResult::new(state.with_phase(Phase::Idle))
                .with_effect(Effect::generate(
                    GenerationRequest::Random { style },
                    Delivery::Edit,
                ))),
            StyledMode::Keywords => {
                let new_state = state.with_phase(Phase::EnteringKeywords { style });
                let reply = view::prompt_for(&new_state.phase, Delivery::Edit);
                Ok(TransitionResult::new(new_state).with_effect(Effect::Reply(reply)))
            }
        },

        // Free-text submissions
        (Phase::EnteringKeywords { style }, Event::Text { text }) => {
            let request = GenerationRequest::Keywords {
                style: *style,
                keywords: text.trim().to_string(),
            };
            Ok(TransitionResult::new(state.with_phase(Phase::Idle))
                .with_effect(Effect::generate(request, Delivery::Send)))
        }

        (Phase::EnteringExample, Event::Text { text }) => {
            let request = GenerationRequest::Example {
                example: text.trim().to_string(),
            };
            Ok(TransitionResult::new(state.with_phase(Phase::Idle))
                .with_effect(Effect::generate(request, Delivery::Send)))
        }

        // Generation finished: record the request (unless replaying) and show results
        (
            _,
            Event::GenerationComplete {
                request,
                names,
                delivery,
                replay,
            },
        ) => {
            let reply = view::results(request.label(), &names, delivery);
            let mut new_state = state.clone();
            if !replay {
                new_state.last_request = Some(request);
            }
            Ok(TransitionResult::new(new_state).with_effect(Effect::Reply(reply)))
        }

        // Everything else is out of phase
        (phase, Event::Button(callback)) => Err(TransitionError::UnexpectedButton {
            phase: phase.name(),
            callback,
        }),

        (phase, Event::Text { .. }) => Err(TransitionError::UnexpectedText {
            phase: phase.name(),
        }),
    }
}
