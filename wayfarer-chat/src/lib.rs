//! Chat with the Wayfarer travel assistant.
//!
//! [`ChatClient`] posts the transcript to the assistant proxy and returns the
//! reply as a [`FragmentStream`]. [`ChatSession`] drives one conversation:
//! it loads and persists history through a [`ChatStore`] and accumulates the
//! streamed reply.
//!
//! ```no_run
//! use futures::StreamExt;
//! use wayfarer_chat::ChatClient;
//! use wayfarer_types::{ChatMessage, ChatRequest};
//!
//! # async fn run() -> Result<(), wayfarer_types::ApiError> {
//! let client = ChatClient::new("https://project.supabase.co", "anon-key");
//! let request = ChatRequest {
//!     messages: vec![ChatMessage::user("Budget tips for Europe")],
//!     trip_id: None,
//! };
//! let mut reply = client.stream_chat(&request).await?;
//! while let Some(fragment) = reply.next().await {
//!     print!("{}", fragment?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub(crate) mod error;
pub mod session;
pub(crate) mod streaming;

pub use client::ChatClient;
pub use session::{ChatSession, HISTORY_LIMIT};

// Re-export wayfarer-types for convenience
pub use wayfarer_types::{ApiError, ChatStore, FragmentStream, SessionError};
