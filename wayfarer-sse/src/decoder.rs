//! Incremental UTF-8 decoding across chunk boundaries.

use std::char::REPLACEMENT_CHARACTER;

/// Stateful UTF-8 decoder.
///
/// A multi-byte character split across two chunks is held back until its
/// remaining bytes arrive. Invalid sequences decode to U+FFFD, the same way
/// [`String::from_utf8_lossy`] treats them.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    /// Leading bytes of an incomplete character (at most 3).
    partial: Vec<u8>,
}

impl Utf8Decoder {
    /// Create a decoder with no carried-over bytes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `chunk`, appending complete characters to `out`.
    pub fn decode(&mut self, chunk: &[u8], out: &mut String) {
        if self.partial.is_empty() {
            self.decode_into(chunk, out);
        } else {
            let mut joined = std::mem::take(&mut self.partial);
            joined.extend_from_slice(chunk);
            self.decode_into(&joined, out);
        }
    }

    /// Flush the decoder at end of input.
    ///
    /// An incomplete trailing character becomes a single U+FFFD.
    pub fn finish(&mut self, out: &mut String) {
        if !self.partial.is_empty() {
            self.partial.clear();
            out.push(REPLACEMENT_CHARACTER);
        }
    }

    /// Whether bytes of an incomplete character are being held back.
    #[must_use]
    pub fn has_partial(&self) -> bool {
        !self.partial.is_empty()
    }

    fn decode_into(&mut self, mut bytes: &[u8], out: &mut String) {
        loop {
            match std::str::from_utf8(bytes) {
                Ok(text) => {
                    out.push_str(text);
                    return;
                }
                Err(e) => {
                    let (valid, rest) = bytes.split_at(e.valid_up_to());
                    if let Ok(text) = std::str::from_utf8(valid) {
                        out.push_str(text);
                    }
                    match e.error_len() {
                        // Truncated character at the end: wait for the rest.
                        None => {
                            self.partial.extend_from_slice(rest);
                            return;
                        }
                        Some(len) => {
                            out.push(REPLACEMENT_CHARACTER);
                            bytes = &rest[len..];
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(chunks: &[&[u8]]) -> String {
        let mut decoder = Utf8Decoder::new();
        let mut out = String::new();
        for chunk in chunks {
            decoder.decode(chunk, &mut out);
        }
        decoder.finish(&mut out);
        out
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(decode_all(&[b"hello ", b"world"]), "hello world");
    }

    #[test]
    fn multibyte_char_split_across_chunks() {
        // "é" is C3 A9, "日" is E6 97 A5
        let bytes = "café 日本".as_bytes();
        let (a, b) = bytes.split_at(4);
        assert_eq!(decode_all(&[a, b]), "café 日本");

        let at = bytes.len() - 4;
        let (a, b) = bytes.split_at(at);
        assert_eq!(decode_all(&[a, b]), "café 日本");
    }

    #[test]
    fn four_byte_char_one_byte_at_a_time() {
        let bytes = "🗺️".as_bytes();
        let chunks: Vec<&[u8]> = bytes.chunks(1).collect();
        assert_eq!(decode_all(&chunks), "🗺️");
    }

    #[test]
    fn partial_is_held_back_until_complete() {
        let mut decoder = Utf8Decoder::new();
        let mut out = String::new();
        decoder.decode(&[0xE6, 0x97], &mut out);
        assert!(out.is_empty());
        assert!(decoder.has_partial());
        decoder.decode(&[0xA5, b'!'], &mut out);
        assert_eq!(out, "日!");
        assert!(!decoder.has_partial());
    }

    #[test]
    fn invalid_bytes_become_replacement_chars() {
        assert_eq!(decode_all(&[b"a\xFFb"]), "a\u{FFFD}b");
    }

    #[test]
    fn truncated_tail_flushes_as_replacement() {
        assert_eq!(decode_all(&[b"ok\xE6\x97"]), "ok\u{FFFD}");
    }
}
