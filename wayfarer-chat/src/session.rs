//! One conversation with the travel assistant.

use futures::StreamExt;
use wayfarer_types::{
    ChatMessage, ChatRequest, ChatStore, NewMessage, Role, SessionError, TripId, UserId,
};

use crate::client::ChatClient;

/// Maximum number of stored messages loaded into a session.
pub const HISTORY_LIMIT: usize = 50;

/// A chat transcript for one user, optionally scoped to a trip.
///
/// `send` takes `&mut self`, so a session never streams two replies at once.
pub struct ChatSession<S> {
    client: ChatClient,
    store: S,
    user_id: UserId,
    trip_id: Option<TripId>,
    messages: Vec<ChatMessage>,
}

impl<S: ChatStore> ChatSession<S> {
    /// Create an empty session. Call [`load_history`](Self::load_history) to
    /// restore earlier messages.
    pub fn new(client: ChatClient, store: S, user_id: UserId, trip_id: Option<TripId>) -> Self {
        Self {
            client,
            store,
            user_id,
            trip_id,
            messages: Vec::new(),
        }
    }

    /// The transcript, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The trip this conversation is about, if any.
    #[must_use]
    pub fn trip_id(&self) -> Option<&TripId> {
        self.trip_id.as_ref()
    }

    /// Replace the transcript with the stored history for this scope.
    ///
    /// Loads at most [`HISTORY_LIMIT`] messages. Returns how many were loaded.
    pub async fn load_history(&mut self) -> Result<usize, SessionError> {
        let rows = self
            .store
            .history(&self.user_id, self.trip_id.as_ref(), HISTORY_LIMIT)
            .await?;
        self.messages = rows.into_iter().map(ChatMessage::from).collect();
        tracing::debug!(
            user_id = %self.user_id,
            trip_id = ?self.trip_id,
            loaded = self.messages.len(),
            "chat history loaded"
        );
        Ok(self.messages.len())
    }

    /// Send a user message and stream the assistant's reply.
    ///
    /// `on_fragment` is called with each fragment and the reply accumulated
    /// so far. Returns the completed assistant message, or `None` when the
    /// input is blank or the assistant produced no text.
    ///
    /// The user message is persisted before the request goes out; the reply
    /// is persisted only when the stream completes with some text. If the
    /// stream fails midway, the partial reply stays in the transcript but is
    /// not persisted. Failed inserts are logged and do not fail the send.
    pub async fn send<F>(
        &mut self,
        text: &str,
        mut on_fragment: F,
    ) -> Result<Option<ChatMessage>, SessionError>
    where
        F: FnMut(&str, &str),
    {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        self.messages.push(ChatMessage::user(text));
        self.persist(Role::User, text).await;

        let request = ChatRequest {
            messages: self.messages.clone(),
            trip_id: self.trip_id.clone(),
        };
        let mut reply_stream = self.client.stream_chat(&request).await?;

        self.messages.push(ChatMessage::assistant(String::new()));
        let mut reply = String::new();
        while let Some(fragment) = reply_stream.next().await {
            let fragment = match fragment {
                Ok(f) => f,
                Err(e) => {
                    tracing::warn!(error = %e, received = reply.len(), "chat reply stream failed");
                    self.pop_empty_reply();
                    return Err(e.into());
                }
            };
            reply.push_str(&fragment);
            if let Some(last) = self.messages.last_mut() {
                last.content.push_str(&fragment);
            }
            on_fragment(&fragment, &reply);
        }

        if reply.is_empty() {
            self.pop_empty_reply();
            return Ok(None);
        }

        self.persist(Role::Assistant, &reply).await;
        Ok(Some(ChatMessage::assistant(reply)))
    }

    async fn persist(&self, role: Role, content: &str) {
        let row = NewMessage {
            user_id: self.user_id.clone(),
            trip_id: self.trip_id.clone(),
            role,
            content: content.to_string(),
        };
        if let Err(e) = self.store.insert(row).await {
            tracing::warn!(
                error = %e,
                role = %role,
                user_id = %self.user_id,
                "failed to persist chat message"
            );
        }
    }

    fn pop_empty_reply(&mut self) {
        if self
            .messages
            .last()
            .is_some_and(|m| m.role == Role::Assistant && m.content.is_empty())
        {
            self.messages.pop();
        }
    }
}
