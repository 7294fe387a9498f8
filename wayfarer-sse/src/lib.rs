//! Reassembly of chat-completion Server-Sent-Events streams.
//!
//! The assistant proxy answers with a chunked body of newline-delimited
//! frames:
//!
//! ```text
//! : keep-alive
//! data: {"choices":[{"delta":{"content":"Hel"}}]}
//!
//! data: {"choices":[{"delta":{"content":"lo"}}]}
//!
//! data: [DONE]
//! ```
//!
//! [`Reassembler`] turns the raw byte chunks into the ordered sequence of
//! `choices[0].delta.content` fragments, whatever the chunk boundaries are.
//! [`reassemble`] adapts it to an async byte stream.
//!
//! ```
//! use wayfarer_sse::collect_fragments;
//!
//! let chunks = [
//!     "data: {\"choices\":[{\"delta\":{\"content\":\"Hel\"}}]}\n",
//!     "data: {\"choices\":[{\"delta\":{\"content\":\"lo\"}}]}\n",
//!     "data: [DONE]\n",
//! ];
//! assert_eq!(collect_fragments(chunks), vec!["Hel", "lo"]);
//! ```

pub mod decoder;
pub mod frame;
pub mod reassembler;
pub mod stream;

pub use decoder::Utf8Decoder;
pub use frame::{DONE_SENTINEL, Line};
pub use reassembler::{DEFAULT_MAX_FRAME_LEN, FinishReason, Reassembler, collect_fragments};
pub use stream::{reassemble, reassemble_with};
