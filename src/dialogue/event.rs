//! Events that can occur in a conversation

use super::effect::Delivery;
use super::state::Mode;
use crate::naming::{GenerationRequest, Style};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Transport events
    Start,
    Help,
    Text {
        text: String,
    },
    Button(Callback),

    // Runtime events
    GenerationComplete {
        request: GenerationRequest,
        names: Vec<String>,
        delivery: Delivery,
        /// True for "generate more"; the stored last request is left alone
        replay: bool,
    },
}

/// Decoded button callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    Mode(Mode),
    Style(Style),
    BackToMain,
    GenerateMore,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallbackError {
    #[error("Unknown callback data: {0:?}")]
    Unknown(String),
}

impl FromStr for Callback {
    type Err = CallbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = match s {
            "back_to_main" => Some(Callback::BackToMain),
            "generate_more" => Some(Callback::GenerateMore),
            _ => match s.split_once('_') {
                Some(("mode", value)) => Mode::from_wire(value).map(Callback::Mode),
                Some(("style", value)) => Style::from_wire(value).map(Callback::Style),
                _ => None,
            },
        };
        decoded.ok_or_else(|| CallbackError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Mode(mode) => write!(f, "mode_{mode}"),
            Callback::Style(style) => write!(f, "style_{style}"),
            Callback::BackToMain => f.write_str("back_to_main"),
            Callback::GenerateMore => f.write_str("generate_more"),
        }
    }
}
