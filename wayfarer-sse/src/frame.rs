//! Line classification and delta extraction.

/// Payload that ends the stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Prefix of a data frame.
pub(crate) const DATA_PREFIX: &str = "data: ";

/// A classified line of the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// `:`-prefixed comment, typically a keep-alive.
    Comment(&'a str),
    /// `data: ` frame; holds the trimmed payload.
    Data(&'a str),
    /// Anything else (`event:`, `id:`, `retry:` and unknown fields).
    Other(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a line that has already had its line terminator removed.
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            Line::Blank
        } else if let Some(comment) = line.strip_prefix(':') {
            Line::Comment(comment)
        } else if let Some(payload) = line.strip_prefix(DATA_PREFIX) {
            Line::Data(payload.trim())
        } else {
            Line::Other(line)
        }
    }

    /// Whether this line cannot continue a data frame whose JSON was cut short.
    pub(crate) fn is_frame_boundary(&self) -> bool {
        matches!(self, Line::Blank | Line::Data(_))
    }
}

/// Strip a single trailing carriage return.
pub(crate) fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Pull `choices[0].delta.content` out of a decoded payload.
///
/// Missing, non-string and empty fragments yield `None`.
pub(crate) fn delta_content(json: &serde_json::Value) -> Option<&str> {
    json["choices"][0]["delta"]["content"]
        .as_str()
        .filter(|content| !content.is_empty())
}

/// Bracket and string nesting of a JSON text seen in pieces.
///
/// Used to tell whether a frame split across lines could be complete yet, so
/// the frame is parsed once it closes instead of once per line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct JsonDepth {
    depth: i64,
    in_string: bool,
    escaped: bool,
    started: bool,
}

impl JsonDepth {
    /// Account for the next piece of text.
    pub(crate) fn advance(&mut self, text: &str) {
        for byte in text.bytes() {
            if self.in_string {
                if self.escaped {
                    self.escaped = false;
                } else if byte == b'\\' {
                    self.escaped = true;
                } else if byte == b'"' {
                    self.in_string = false;
                }
                continue;
            }
            match byte {
                b'"' => {
                    self.in_string = true;
                    self.started = true;
                }
                b'{' | b'[' => {
                    self.depth += 1;
                    self.started = true;
                }
                b'}' | b']' => self.depth -= 1,
                b' ' | b'\t' | b'\r' | b'\n' => {}
                _ => self.started = true,
            }
        }
    }

    /// Whether the text so far could hold a whole value. Once this is true,
    /// appending more text can no longer turn a parse failure into a success.
    pub(crate) fn is_closed(&self) -> bool {
        self.started && !self.in_string && self.depth <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_lines() {
        assert_eq!(Line::classify(""), Line::Blank);
        assert_eq!(Line::classify("   "), Line::Blank);
        assert_eq!(Line::classify(": ping"), Line::Comment(" ping"));
        assert_eq!(Line::classify("data: {\"a\":1} "), Line::Data("{\"a\":1}"));
        assert_eq!(Line::classify("data: [DONE]"), Line::Data(DONE_SENTINEL));
        assert_eq!(Line::classify("event: message"), Line::Other("event: message"));
    }

    #[test]
    fn data_without_space_is_not_a_frame() {
        assert_eq!(Line::classify("data:{}"), Line::Other("data:{}"));
    }

    #[test]
    fn strip_cr_removes_one() {
        assert_eq!(strip_cr("data: x\r"), "data: x");
        assert_eq!(strip_cr("data: x\r\r"), "data: x\r");
        assert_eq!(strip_cr("data: x"), "data: x");
    }

    #[test]
    fn delta_content_extraction() {
        let json = serde_json::json!({"choices":[{"delta":{"content":"Hi"}}]});
        assert_eq!(delta_content(&json), Some("Hi"));

        let empty = serde_json::json!({"choices":[{"delta":{"content":""}}]});
        assert_eq!(delta_content(&empty), None);

        let role_only = serde_json::json!({"choices":[{"delta":{"role":"assistant"}}]});
        assert_eq!(delta_content(&role_only), None);

        let null = serde_json::json!({"choices":[{"delta":{"content":null}}]});
        assert_eq!(delta_content(&null), None);

        assert_eq!(delta_content(&serde_json::json!(42)), None);
        assert_eq!(delta_content(&serde_json::json!({"choices":[]})), None);
    }

    fn depth_of(pieces: &[&str]) -> JsonDepth {
        let mut depth = JsonDepth::default();
        for piece in pieces {
            depth.advance(piece);
        }
        depth
    }

    #[test]
    fn depth_tracks_nesting_across_pieces() {
        assert!(!depth_of(&["{\"choices\":[{\"delta\":"]).is_closed());
        assert!(depth_of(&["{\"choices\":[{\"delta\":", "{}}]}"]).is_closed());
        assert!(!depth_of(&[""]).is_closed());
        assert!(!depth_of(&["  "]).is_closed());
    }

    #[test]
    fn depth_ignores_brackets_inside_strings() {
        assert!(!depth_of(&["{\"a\":\"}]\""]).is_closed());
        assert!(!depth_of(&["{\"a\":\"\\\"}"]).is_closed());
        assert!(depth_of(&["{\"a\":\"\\\"}\"}"]).is_closed());
        assert!(!depth_of(&["\"open"]).is_closed());
    }

    #[test]
    fn scalars_and_stray_closers_are_closed() {
        assert!(depth_of(&["42x"]).is_closed());
        assert!(depth_of(&["}"]).is_closed());
    }
}
