//! Reply streaming for the assistant proxy.
//!
//! The proxy relays the gateway's OpenAI-style SSE body unchanged:
//! ```text
//! data: {"choices":[{"delta":{"content":"Day 1"}}]}
//!
//! data: [DONE]
//! ```

use futures::StreamExt;
use reqwest::Response;
use wayfarer_types::FragmentStream;

use crate::error::map_reqwest_error;

/// Wrap an HTTP response body into a [`FragmentStream`].
pub(crate) fn stream_reply(response: Response) -> FragmentStream {
    let fragments = wayfarer_sse::reassemble(response.bytes_stream())
        .map(|fragment| fragment.map_err(map_reqwest_error));
    Box::pin(fragments)
}
