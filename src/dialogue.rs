//! Dialogue state machine
//!
//! Elm-style: a pure `transition(state, event)` returns the next state plus
//! effects for the runtime to execute.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;
pub mod view;

#[cfg(test)]
mod proptests;

pub use effect::{Delivery, Effect, Reply};
#[allow(unused_imports)] // Public API re-exports
pub use event::{Callback, CallbackError, Event};
#[allow(unused_imports)] // Public API re-exports
pub use state::{ConversationState, Mode, Phase, StyledMode};
#[allow(unused_imports)] // Public API re-exports
pub use transition::{transition, TransitionError, TransitionResult};
