//! HTTP API for the track name generator
//!
//! Stands in for the chat transport: each endpoint delivers one dialogue
//! event and returns the replies to display.

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::naming::NamingEngine;
use crate::runtime::{SharedRuntime, StateStore};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<SharedRuntime>,
}

impl AppState {
    pub fn new(store: Arc<dyn StateStore>, engine: NamingEngine) -> Self {
        Self {
            runtime: Arc::new(SharedRuntime::new(store, engine)),
        }
    }
}
