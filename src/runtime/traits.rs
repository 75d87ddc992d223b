//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the runtime with mock implementations.

use crate::dialogue::ConversationState;
use async_trait::async_trait;
use std::sync::Arc;

/// Storage for per-conversation dialogue state
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Current state; a conversation never seen before is in the default state
    async fn get(&self, conv_id: &str) -> Result<ConversationState, String>;

    /// Replace the state
    async fn put(&self, conv_id: &str, state: &ConversationState) -> Result<(), String>;

    /// Forget the conversation entirely
    async fn clear(&self, conv_id: &str) -> Result<(), String>;
}

#[async_trait]
impl<T: StateStore + ?Sized> StateStore for Arc<T> {
    async fn get(&self, conv_id: &str) -> Result<ConversationState, String> {
        (**self).get(conv_id).await
    }

    async fn put(&self, conv_id: &str, state: &ConversationState) -> Result<(), String> {
        (**self).put(conv_id, state).await
    }

    async fn clear(&self, conv_id: &str) -> Result<(), String> {
        (**self).clear(conv_id).await
    }
}
