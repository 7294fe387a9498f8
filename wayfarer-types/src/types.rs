//! Chat message, request and storage row types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The role of a message participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A human user.
    User,
    /// The travel assistant.
    Assistant,
    /// A system instruction.
    System,
}

impl Role {
    /// The wire name of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Identifier of an authenticated user.
    UserId
);
string_id!(
    /// Identifier of a trip.
    TripId
);

/// One chat turn as sent to the assistant proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who authored the message.
    pub role: Role,
    /// The message text.
    pub content: String,
}

impl ChatMessage {
    /// Create a user message.
    ///
    /// # Example
    ///
    /// ```
    /// use wayfarer_types::{ChatMessage, Role};
    /// let msg = ChatMessage::user("Plan a 7-day trip to Japan");
    /// assert_eq!(msg.role, Role::User);
    /// ```
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
        }
    }

    /// Create an assistant message.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
        }
    }

    /// Create a system message.
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: text.into(),
        }
    }
}

/// Request body for the assistant proxy endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The full transcript, oldest first, ending with the new user message.
    pub messages: Vec<ChatMessage>,
    /// The trip the conversation is about, if any.
    #[serde(rename = "tripId")]
    pub trip_id: Option<TripId>,
}

/// A persisted chat row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessage {
    /// Row identifier.
    pub id: String,
    /// Owner of the message.
    pub user_id: UserId,
    /// Trip scope, `None` for the general assistant.
    pub trip_id: Option<TripId>,
    /// Who authored the message.
    pub role: Role,
    /// The message text.
    pub content: String,
    /// Insertion time.
    pub created_at: DateTime<Utc>,
}

impl From<StoredMessage> for ChatMessage {
    fn from(row: StoredMessage) -> Self {
        Self {
            role: row.role,
            content: row.content,
        }
    }
}

/// A chat row to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    /// Owner of the message.
    pub user_id: UserId,
    /// Trip scope, `None` for the general assistant.
    pub trip_id: Option<TripId>,
    /// Who authored the message.
    pub role: Role,
    /// The message text.
    pub content: String,
}

/// Lifecycle stage of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Still being put together.
    #[default]
    Planning,
    /// Planned and not started yet.
    Upcoming,
    /// Under way.
    Ongoing,
    /// Over.
    Completed,
}

/// A trip row to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrip {
    /// Owner of the trip.
    pub user_id: UserId,
    /// Trip name.
    pub name: String,
    /// Short summary.
    pub description: Option<String>,
    /// Whether the itinerary came from the planner.
    pub is_ai_generated: bool,
    /// Initial status.
    pub status: TripStatus,
}

/// A persisted trip row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTrip {
    /// Row identifier.
    pub id: TripId,
    /// Owner of the trip.
    pub user_id: UserId,
    /// Trip name.
    pub name: String,
    /// Short summary.
    pub description: Option<String>,
    /// Whether the itinerary came from the planner.
    pub is_ai_generated: bool,
    /// Current status.
    pub status: TripStatus,
    /// Insertion time.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        let back: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(back, Role::User);
    }

    #[test]
    fn chat_request_uses_camel_case_trip_id() {
        let req = ChatRequest {
            messages: vec![ChatMessage::user("hi")],
            trip_id: Some(TripId::new("trip-1")),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "messages": [{"role": "user", "content": "hi"}],
                "tripId": "trip-1"
            })
        );
    }

    #[test]
    fn chat_request_without_trip_sends_null() {
        let req = ChatRequest {
            messages: vec![],
            trip_id: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json["tripId"].is_null());
    }

    #[test]
    fn trip_status_uses_lowercase_wire_names() {
        assert_eq!(TripStatus::default(), TripStatus::Planning);
        assert_eq!(serde_json::to_string(&TripStatus::Ongoing).unwrap(), "\"ongoing\"");
    }

    #[test]
    fn stored_message_converts_to_chat_message() {
        let row = StoredMessage {
            id: "m1".into(),
            user_id: UserId::new("u1"),
            trip_id: None,
            role: Role::Assistant,
            content: "Kyoto in autumn".into(),
            created_at: Utc::now(),
        };
        let msg: ChatMessage = row.into();
        assert_eq!(msg, ChatMessage::assistant("Kyoto in autumn"));
    }
}
