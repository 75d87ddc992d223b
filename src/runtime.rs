//! Runtime for executing conversations
//!
//! Loads conversation state, runs transitions, executes their effects and
//! persists the result.

mod executor;
mod store;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::DialogueRuntime;
pub use store::InMemoryStateStore;
pub use traits::*;

/// Runtime with the store chosen at startup
pub type SharedRuntime = DialogueRuntime<std::sync::Arc<dyn StateStore>>;
