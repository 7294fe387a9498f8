//! Shared types for the Wayfarer travel assistant.
//!
//! Everything the other crates agree on lives here: the chat message shapes
//! sent to the assistant proxy, the persisted chat and trip rows, the error
//! enums and the [`ChatStore`] and [`TripStore`] traits behind which the
//! hosted database sits.

pub mod error;
pub mod stream;
pub mod traits;
pub mod types;

pub use error::*;
pub use stream::*;
pub use traits::*;
pub use types::*;
