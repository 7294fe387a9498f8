//! Async adapter from a byte stream to a fragment stream.

use futures::{Stream, StreamExt};

use crate::reassembler::Reassembler;

/// Reassemble a raw byte stream into a stream of content fragments.
///
/// Works over any chunked body, such as `reqwest::Response::bytes_stream()`.
/// A read error is yielded once and ends the stream. Once the `[DONE]`
/// sentinel is seen the source is dropped without being polled again.
pub fn reassemble<S, B, E>(byte_stream: S) -> impl Stream<Item = Result<String, E>> + Send + 'static
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Send + 'static,
{
    reassemble_with(Reassembler::new(), byte_stream)
}

/// Like [`reassemble`], with a preconfigured [`Reassembler`].
pub fn reassemble_with<S, B, E>(
    mut reassembler: Reassembler,
    byte_stream: S,
) -> impl Stream<Item = Result<String, E>> + Send + 'static
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Send + 'static,
{
    async_stream::stream! {
        let mut bytes_stream = std::pin::pin!(byte_stream);

        while let Some(chunk_result) = bytes_stream.next().await {
            let chunk = match chunk_result {
                Ok(b) => b,
                Err(e) => {
                    yield Err(e);
                    return;
                }
            };

            for fragment in reassembler.feed(chunk.as_ref()) {
                yield Ok(fragment);
            }

            if reassembler.is_done() {
                break;
            }
        }

        reassembler.finish();
    }
}
