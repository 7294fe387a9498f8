//! Streaming handle for incremental assistant replies.

use std::pin::Pin;

use futures::Stream;

use crate::error::ApiError;

/// Boxed stream of reply fragments, in the order the assistant produced them.
///
/// A transport failure is yielded once as `Err` and ends the stream.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, ApiError>> + Send>>;
