//! Effects produced by state transitions

use super::view::Keyboard;
use crate::naming::GenerationRequest;
use serde::Serialize;

/// How the transport should show a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    /// Send as a new message
    Send,
    /// Replace the text and buttons of the message whose button was pressed
    Edit,
}

/// A message for the transport to display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub delivery: Delivery,
    pub keyboard: Keyboard,
}

impl Reply {
    pub fn new(text: impl Into<String>, keyboard: Keyboard, delivery: Delivery) -> Self {
        Self {
            text: text.into(),
            delivery,
            keyboard,
        }
    }
}

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a message
    Reply(Reply),

    /// Run the naming engine; completion comes back as
    /// `Event::GenerationComplete`
    Generate {
        request: GenerationRequest,
        delivery: Delivery,
        replay: bool,
    },
}

impl Effect {
    pub fn generate(request: GenerationRequest, delivery: Delivery) -> Self {
        Effect::Generate {
            request,
            delivery,
            replay: false,
        }
    }

    pub fn regenerate(request: GenerationRequest) -> Self {
        Effect::Generate {
            request,
            delivery: Delivery::Edit,
            replay: true,
        }
    }
}
