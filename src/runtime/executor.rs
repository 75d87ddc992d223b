//! Dialogue runtime executor

use super::traits::StateStore;
use crate::dialogue::{transition, view, ConversationState, Effect, Event, Reply};
use crate::naming::NamingEngine;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Drives the dialogue state machine for every conversation.
///
/// Events for one conversation are handled strictly one at a time: an event
/// that arrives while a generation is in flight waits its turn. Different
/// conversations proceed independently.
pub struct DialogueRuntime<S>
where
    S: StateStore + 'static,
{
    store: S,
    engine: NamingEngine,
    /// One lock per conversation, held for the whole handling of an event
    conversations: RwLock<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S> DialogueRuntime<S>
where
    S: StateStore + 'static,
{
    pub fn new(store: S, engine: NamingEngine) -> Self {
        Self {
            store,
            engine,
            conversations: RwLock::new(HashMap::new()),
        }
    }

    #[allow(dead_code)] // Test inspection
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle one transport event and return the replies to display
    pub async fn handle(&self, conv_id: &str, event: Event) -> Result<Vec<Reply>, String> {
        let lock = self.conversation_lock(conv_id).await;
        let result = {
            let _guard = lock.lock().await;
            self.process(conv_id, event).await
        };
        self.release_lock(conv_id, lock).await;
        result
    }

    async fn process(&self, conv_id: &str, event: Event) -> Result<Vec<Reply>, String> {
        let mut state = self.store.get(conv_id).await?;
        let mut replies = Vec::new();

        // Effects may generate follow-up events; process them in a loop
        let mut events_to_process = vec![event];

        while let Some(current_event) = events_to_process.pop() {
            let result = match transition(&state, current_event) {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(
                        conv_id = %conv_id,
                        phase = state.phase.name(),
                        error = %e,
                        "Ignoring out-of-phase event"
                    );
                    replies.push(view::prompt_for(&state.phase, e.redisplay_delivery()));
                    continue;
                }
            };

            if result.new_state.phase != state.phase {
                tracing::debug!(
                    conv_id = %conv_id,
                    from = state.phase.name(),
                    to = result.new_state.phase.name(),
                    mode = ?result.new_state.mode(),
                    style = ?result.new_state.style(),
                    "Phase change"
                );
            }
            state = result.new_state;
            self.persist(conv_id, &state).await?;

            for effect in result.effects {
                if let Some(generated_event) = self.execute_effect(conv_id, effect, &mut replies).await {
                    events_to_process.push(generated_event);
                }
            }
        }

        Ok(replies)
    }

    async fn execute_effect(
        &self,
        conv_id: &str,
        effect: Effect,
        replies: &mut Vec<Reply>,
    ) -> Option<Event> {
        match effect {
            Effect::Reply(reply) => {
                replies.push(reply);
                None
            }
            Effect::Generate {
                request,
                delivery,
                replay,
            } => {
                tracing::info!(
                    conv_id = %conv_id,
                    mode = request.mode_name(),
                    replay,
                    "Generating track names"
                );
                let names = self.engine.generate(&request).await;
                Some(Event::GenerationComplete {
                    request,
                    names,
                    delivery,
                    replay,
                })
            }
        }
    }

    async fn persist(&self, conv_id: &str, state: &ConversationState) -> Result<(), String> {
        if state.is_pristine() {
            self.store.clear(conv_id).await
        } else {
            self.store.put(conv_id, state).await
        }
    }

    async fn conversation_lock(&self, conv_id: &str) -> Arc<Mutex<()>> {
        {
            let conversations = self.conversations.read().await;
            if let Some(lock) = conversations.get(conv_id) {
                return lock.clone();
            }
        }

        self.conversations
            .write()
            .await
            .entry(conv_id.to_string())
            .or_default()
            .clone()
    }

    /// Drop the conversation's lock entry once nobody else holds or awaits it
    async fn release_lock(&self, conv_id: &str, lock: Arc<Mutex<()>>) {
        let mut conversations = self.conversations.write().await;
        let unshared = conversations
            .get(conv_id)
            .is_some_and(|entry| Arc::ptr_eq(entry, &lock) && Arc::strong_count(&lock) == 2);
        // Let go before the map guard so the next releaser sees the true count
        drop(lock);
        if unshared {
            conversations.remove(conv_id);
        }
    }

    #[cfg(test)]
    async fn lock_count(&self) -> usize {
        self.conversations.read().await.len()
    }
}
