//! Streamed text body handling
//!
//! Response bodies arrive as arbitrary byte chunks; a chunk boundary can fall
//! inside a multi-byte UTF-8 sequence, so incomplete tails are carried over to
//! the next chunk instead of being replaced.

use futures::{Stream, StreamExt};

/// Incremental UTF-8 decoder
#[derive(Debug, Default)]
pub struct TextDecoder {
    pending: Vec<u8>,
}

impl TextDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode as much of the buffered input as forms complete characters
    pub fn push(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);
        let mut text = String::new();
        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(valid) => {
                    text.push_str(valid);
                    self.pending.clear();
                    return text;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    text.push_str(&String::from_utf8_lossy(&self.pending[..valid]));
                    match e.error_len() {
                        // Incomplete sequence at the end: keep it for the next chunk
                        None => {
                            self.pending.drain(..valid);
                            return text;
                        }
                        Some(invalid) => {
                            text.push(char::REPLACEMENT_CHARACTER);
                            self.pending.drain(..valid + invalid);
                        }
                    }
                }
            }
        }
    }

    /// Flush whatever is left, replacing invalid bytes
    pub fn finish(self) -> String {
        String::from_utf8_lossy(&self.pending).into_owned()
    }
}

/// Drain a byte stream into one string, handing each decoded piece to
/// `on_chunk` as it arrives
pub async fn collect_text<S, B, E, F>(stream: S, mut on_chunk: F) -> Result<String, E>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    F: FnMut(&str),
{
    let mut stream = std::pin::pin!(stream);
    let mut decoder = TextDecoder::new();
    let mut full = String::new();

    while let Some(chunk) = stream.next().await {
        let text = decoder.push(chunk?.as_ref());
        if !text.is_empty() {
            on_chunk(&text);
            full.push_str(&text);
        }
    }

    let rest = decoder.finish();
    if !rest.is_empty() {
        on_chunk(&rest);
        full.push_str(&rest);
    }

    Ok(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[test]
    fn test_split_multibyte_character() {
        let bytes = "👋 hi".as_bytes();
        let mut decoder = TextDecoder::new();

        assert_eq!(decoder.push(&bytes[..2]), "");
        assert_eq!(decoder.push(&bytes[2..]), "👋 hi");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_truncated_tail_is_replaced() {
        let bytes = "é".as_bytes();
        let mut decoder = TextDecoder::new();
        assert_eq!(decoder.push(&bytes[..1]), "");
        assert_eq!(decoder.finish(), "\u{FFFD}");
    }

    #[test]
    fn test_invalid_byte_keeps_split_tail() {
        let mut decoder = TextDecoder::new();
        assert_eq!(decoder.push(&[0xFF, 0xE2, 0x80]), "\u{FFFD}");
        assert_eq!(decoder.push(&[0x9D]), "\u{201D}");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_invalid_bytes_between_text() {
        let mut decoder = TextDecoder::new();
        assert_eq!(decoder.push(b"ok\xFFhi\xC0"), "ok\u{FFFD}hi\u{FFFD}");
        assert_eq!(decoder.finish(), "");
    }

    #[tokio::test]
    async fn test_collect_text() {
        let chunks: Vec<Result<Vec<u8>, String>> = vec![
            Ok(b"Sign ".to_vec()),
            Ok("\u{201C}thank".as_bytes()[..2].to_vec()),
            Ok("\u{201C}thank".as_bytes()[2..].to_vec()),
            Ok(b" you\xE2\x80\x9D".to_vec()),
        ];
        let mut seen = Vec::new();
        let text = collect_text(stream::iter(chunks), |piece| seen.push(piece.to_string()))
            .await
            .unwrap();

        assert_eq!(text, "Sign \u{201C}thank you\u{201D}");
        assert_eq!(seen.concat(), text);
    }

    #[tokio::test]
    async fn test_collect_text_stops_on_error() {
        let chunks: Vec<Result<&[u8], &str>> = vec![Ok(&b"partial"[..]), Err("connection reset")];
        let result = collect_text(stream::iter(chunks), |_| {}).await;
        assert_eq!(result.unwrap_err(), "connection reset");
    }
}
