//! In-process state store

use super::traits::StateStore;
use crate::dialogue::ConversationState;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Keeps every conversation's state in memory; nothing survives a restart
#[derive(Default)]
pub struct InMemoryStateStore {
    states: RwLock<HashMap<String, ConversationState>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of conversations with stored state
    #[allow(dead_code, clippy::len_without_is_empty)] // Test inspection
    pub async fn len(&self) -> usize {
        self.states.read().await.len()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn get(&self, conv_id: &str) -> Result<ConversationState, String> {
        Ok(self
            .states
            .read()
            .await
            .get(conv_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn put(&self, conv_id: &str, state: &ConversationState) -> Result<(), String> {
        self.states
            .write()
            .await
            .insert(conv_id.to_string(), state.clone());
        Ok(())
    }

    async fn clear(&self, conv_id: &str) -> Result<(), String> {
        self.states.write().await.remove(conv_id);
        Ok(())
    }
}
