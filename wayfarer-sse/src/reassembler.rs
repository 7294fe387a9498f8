//! The chunk-to-fragment state machine.

use tracing::{debug, warn};

use crate::decoder::Utf8Decoder;
use crate::frame::{DATA_PREFIX, DONE_SENTINEL, JsonDepth, Line, delta_content, strip_cr};

/// Default upper bound for a single line or a deferred frame, in bytes.
pub const DEFAULT_MAX_FRAME_LEN: usize = 1024 * 1024;

/// Why a reassembly run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// The `[DONE]` sentinel was seen.
    Sentinel,
    /// The source ran out of chunks first.
    EndOfStream,
}

/// Reassembles content fragments from raw SSE byte chunks.
///
/// Text is kept in a single growable buffer with a read cursor. Consumed
/// text is compacted once per [`feed`](Self::feed), not once per line, and
/// the search for the next line terminator resumes where the previous feed
/// stopped, so each byte is scanned once however the input is chunked.
///
/// A data frame whose JSON does not parse is *deferred* while its brackets
/// and strings are still open: it stays at the head of the buffer and the
/// following lines are joined on, so a payload cut at an internal newline is
/// decoded whole once the rest arrives. The joined frame is parsed again only
/// when its nesting closes. The frame is dropped as malformed when it closes
/// and still does not parse, when the next line is blank or starts a new
/// `data: ` frame, or when it grows past the maximum frame length.
///
/// Any single line longer than the maximum frame length is dropped as well,
/// whether it arrives whole or in pieces; the buffer never holds more than
/// one maximum-length line plus the chunk being fed.
#[derive(Debug)]
pub struct Reassembler {
    decoder: Utf8Decoder,
    /// Decoded text not yet consumed, starting at `cursor`.
    pending: String,
    cursor: usize,
    /// Everything in `pending` before this offset has been searched for a
    /// line terminator already.
    scanned: usize,
    /// Continuation state of a deferred frame that starts at `cursor`.
    deferred: Option<Deferred>,
    /// Skipping the rest of an oversized line.
    discarding: bool,
    max_frame_len: usize,
    done: bool,
    bytes_received: usize,
    fragments_emitted: usize,
    /// Bytes searched, classified or parsed so far.
    bytes_examined: usize,
}

#[derive(Debug, Clone, Copy)]
struct Deferred {
    /// End (past the newline) of the lines joined so far.
    end: usize,
    depth: JsonDepth,
}

/// Outcome of looking at one candidate line.
enum Action {
    Skip,
    Emit(Option<String>),
    Defer(JsonDepth),
    Malformed,
    Stop,
}

impl Reassembler {
    /// Create a reassembler with the default maximum frame length.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_frame_len(DEFAULT_MAX_FRAME_LEN)
    }

    /// Create a reassembler that drops any line, and gives up on any deferred
    /// frame, longer than `max_frame_len` bytes.
    #[must_use]
    pub fn with_max_frame_len(max_frame_len: usize) -> Self {
        Self {
            decoder: Utf8Decoder::new(),
            pending: String::new(),
            cursor: 0,
            scanned: 0,
            deferred: None,
            discarding: false,
            max_frame_len,
            done: false,
            bytes_received: 0,
            fragments_emitted: 0,
            bytes_examined: 0,
        }
    }

    /// Feed one chunk and return the fragments it completes, in order.
    ///
    /// After the sentinel has been seen this returns nothing.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut fragments = Vec::new();
        if self.done {
            return fragments;
        }

        self.bytes_received += chunk.len();
        self.compact();
        self.decoder.decode(chunk, &mut self.pending);
        self.scan(&mut fragments);

        self.fragments_emitted += fragments.len();
        fragments
    }

    /// Whether the `[DONE]` sentinel has been seen.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Total bytes fed so far.
    #[must_use]
    pub fn bytes_received(&self) -> usize {
        self.bytes_received
    }

    /// Total fragments emitted so far.
    #[must_use]
    pub fn fragments_emitted(&self) -> usize {
        self.fragments_emitted
    }

    /// End the run. Anything still buffered is discarded unprocessed.
    pub fn finish(mut self) -> FinishReason {
        if self.done {
            return FinishReason::Sentinel;
        }

        self.decoder.finish(&mut self.pending);
        if self.deferred.is_some() {
            warn!(
                frame_len = self.pending.len() - self.cursor,
                "dropping malformed SSE frame at end of stream"
            );
        } else if self.discarding {
            debug!("oversized SSE line cut off by end of stream");
        } else if self.pending.len() > self.cursor {
            debug!(
                residual = self.pending.len() - self.cursor,
                "discarding unterminated SSE data at end of stream"
            );
        }
        debug!(
            bytes = self.bytes_received,
            fragments = self.fragments_emitted,
            examined = self.bytes_examined,
            "SSE stream ended without [DONE]"
        );
        FinishReason::EndOfStream
    }

    fn compact(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.pending.drain(..self.cursor);
        if let Some(deferred) = self.deferred.as_mut() {
            deferred.end -= self.cursor;
        }
        self.scanned = self.scanned.saturating_sub(self.cursor);
        self.cursor = 0;
    }

    /// Find the next line terminator at or after `from`, without searching
    /// the same bytes twice.
    fn next_newline(&mut self, from: usize) -> Option<usize> {
        let start = from.max(self.scanned);
        let hit = self.pending[start..].find('\n').map(|offset| start + offset);
        let end = hit.map_or(self.pending.len(), |newline| newline + 1);
        self.bytes_examined += end - start;
        self.scanned = end;
        hit
    }

    fn scan(&mut self, out: &mut Vec<String>) {
        loop {
            if self.discarding && !self.skip_discarded() {
                return;
            }
            if self.deferred.is_some() {
                if self.retry_deferred(out) {
                    continue;
                }
                return;
            }

            let Some(newline) = self.next_newline(self.cursor) else {
                self.discard_if_oversized();
                return;
            };

            let line_len = newline - self.cursor;
            if line_len > self.max_frame_len {
                warn!(line_len, "dropping oversized SSE line");
                self.cursor = newline + 1;
                continue;
            }

            let action = match Line::classify(strip_cr(&self.pending[self.cursor..newline])) {
                Line::Blank | Line::Comment(_) | Line::Other(_) => Action::Skip,
                Line::Data(DONE_SENTINEL) => Action::Stop,
                Line::Data(payload) => {
                    self.bytes_examined += payload.len();
                    match parse_payload(payload) {
                        Ok(fragment) => Action::Emit(fragment),
                        Err(_) => {
                            let mut depth = JsonDepth::default();
                            depth.advance(payload);
                            if depth.is_closed() {
                                Action::Malformed
                            } else {
                                Action::Defer(depth)
                            }
                        }
                    }
                }
            };

            match action {
                Action::Skip => self.cursor = newline + 1,
                Action::Emit(fragment) => {
                    out.extend(fragment);
                    self.cursor = newline + 1;
                }
                Action::Defer(depth) => {
                    debug!(
                        frame_len = line_len,
                        "SSE frame incomplete, waiting for continuation"
                    );
                    self.deferred = Some(Deferred {
                        end: newline + 1,
                        depth,
                    });
                }
                Action::Malformed => {
                    warn!(frame_len = line_len, "dropping malformed SSE frame");
                    self.cursor = newline + 1;
                }
                Action::Stop => {
                    self.terminate();
                    return;
                }
            }
        }
    }

    /// Try to extend the deferred frame with the next buffered line.
    ///
    /// Returns `false` when more input is needed.
    fn retry_deferred(&mut self, out: &mut Vec<String>) -> bool {
        let Some(Deferred {
            end: span_end,
            mut depth,
        }) = self.deferred
        else {
            return true;
        };
        let Some(newline) = self.next_newline(span_end) else {
            if self.pending.len() - self.cursor > self.max_frame_len {
                self.drop_deferred(span_end, "frame too long");
                return true;
            }
            return false;
        };

        let next = strip_cr(&self.pending[span_end..newline]);
        if Line::classify(next).is_frame_boundary() {
            self.drop_deferred(span_end, "next frame started");
            return true;
        }
        if newline - self.cursor > self.max_frame_len {
            self.drop_deferred(span_end, "frame too long");
            return true;
        }

        depth.advance(next);
        self.bytes_examined += next.len();
        if !depth.is_closed() {
            self.deferred = Some(Deferred {
                end: newline + 1,
                depth,
            });
            return true;
        }

        let joined = &self.pending[self.cursor..newline];
        let payload = joined.strip_prefix(DATA_PREFIX).unwrap_or(joined).trim();
        self.bytes_examined += payload.len();
        match parse_payload(payload) {
            Ok(fragment) => {
                out.extend(fragment);
                self.cursor = newline + 1;
                self.deferred = None;
            }
            Err(_) => self.drop_deferred(newline + 1, "frame closed without valid JSON"),
        }
        true
    }

    fn drop_deferred(&mut self, span_end: usize, reason: &'static str) {
        warn!(
            frame_len = span_end - self.cursor,
            reason, "dropping malformed SSE frame"
        );
        self.cursor = span_end;
        self.scanned = span_end;
        self.deferred = None;
    }

    /// Start skipping the unterminated line at `cursor` once it is too long.
    fn discard_if_oversized(&mut self) {
        let line_len = self.pending.len() - self.cursor;
        if line_len <= self.max_frame_len {
            return;
        }
        warn!(line_len, "dropping oversized SSE line");
        self.pending.truncate(self.cursor);
        self.scanned = self.cursor;
        self.discarding = true;
    }

    /// Skip to the end of the oversized line. Returns `false` when the end
    /// has not arrived yet.
    fn skip_discarded(&mut self) -> bool {
        match self.next_newline(self.cursor) {
            Some(newline) => {
                self.cursor = newline + 1;
                self.discarding = false;
                true
            }
            None => {
                self.pending.truncate(self.cursor);
                self.scanned = self.cursor;
                false
            }
        }
    }

    fn terminate(&mut self) {
        debug!(
            bytes = self.bytes_received,
            discarded = self.pending.len() - self.cursor,
            examined = self.bytes_examined,
            "SSE [DONE] received"
        );
        self.done = true;
        self.pending.clear();
        self.cursor = 0;
        self.scanned = 0;
        self.deferred = None;
        self.discarding = false;
    }
}

impl Default for Reassembler {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_payload(payload: &str) -> Result<Option<String>, serde_json::Error> {
    let json: serde_json::Value = serde_json::from_str(payload)?;
    Ok(delta_content(&json).map(str::to_owned))
}

/// Run a whole reassembly over an in-memory sequence of chunks.
pub fn collect_fragments<I, B>(chunks: I) -> Vec<String>
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let mut reassembler = Reassembler::new();
    let mut fragments = Vec::new();
    for chunk in chunks {
        fragments.extend(reassembler.feed(chunk.as_ref()));
        if reassembler.is_done() {
            break;
        }
    }
    reassembler.finish();
    fragments
}
