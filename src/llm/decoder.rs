//! Line-buffered decoder for the generation event stream.
//!
//! The endpoint answers with server-sent events whose `data:` lines carry one
//! JSON chunk each. Network chunks do not respect line boundaries, so the
//! decoder keeps the trailing partial line until the next chunk (or the end of
//! the stream) completes it.

use serde::Deserialize;

/// Marker that prefixes every event payload line.
const DATA_MARKER: &str = "data:";

/// One JSON chunk of a `streamGenerateContent` response.
///
/// Every level is optional; a chunk without text (e.g. a usage-only or
/// safety-rating chunk) is valid and simply carries no fragment.
#[derive(Debug, Default, Deserialize)]
struct GenerateContentChunk {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Incremental decoder from raw bytes to text fragments.
#[derive(Debug, Default)]
pub struct FragmentDecoder {
    buf: Vec<u8>,
    skipped: usize,
}

impl FragmentDecoder {
    /// Create an empty decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one network chunk and return the fragments of every line it completed.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut fragments = Vec::new();
        while let Some(pos) = self.buf.iter().position(|b| *b == b'\n') {
            let line = self.buf.drain(..=pos).collect::<Vec<_>>();
            // Newline is ASCII, so a complete line never splits a UTF-8 sequence.
            let text = String::from_utf8_lossy(&line[..line.len() - 1]);
            if let Some(fragment) = self.record(&text) {
                fragments.push(fragment);
            }
        }
        fragments
    }

    /// Flush the trailing line left over when the stream ends without a newline.
    pub fn finish(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let line = std::mem::take(&mut self.buf);
        let text = String::from_utf8_lossy(&line).into_owned();
        self.record(&text)
    }

    /// Number of records dropped because they failed to parse.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn record(&mut self, line: &str) -> Option<String> {
        let payload = record_payload(line)?;
        match serde_json::from_str::<GenerateContentChunk>(payload) {
            Ok(chunk) => extract_fragment(chunk),
            Err(e) => {
                self.skipped += 1;
                tracing::debug!(error = %e, record_length = payload.len(), "Skipping malformed stream record");
                None
            }
        }
    }
}

/// Return the JSON payload of a record, or `None` for lines that carry none.
///
/// `data:` lines yield their payload. Bare lines that open a JSON value are
/// accepted as-is; so are bare lines that are plainly not event fields, so the
/// parse step can count them as malformed. Blank lines, SSE comments and the
/// other SSE fields (`event:`, `id:`, `retry:`) carry nothing.
fn record_payload(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(':') {
        return None;
    }

    if let Some(rest) = line.strip_prefix(DATA_MARKER) {
        let data = rest.trim();
        if data.is_empty() || data == "[DONE]" {
            return None;
        }
        return Some(data);
    }

    if ["event:", "id:", "retry:"]
        .iter()
        .any(|field| line.starts_with(field))
    {
        return None;
    }

    Some(line)
}

fn extract_fragment(chunk: GenerateContentChunk) -> Option<String> {
    chunk
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_line(text: &str) -> String {
        format!(
            "data: {}\n",
            serde_json::json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
        )
    }

    #[test]
    fn test_extracts_fragments_in_order() {
        let mut decoder = FragmentDecoder::new();
        let body = format!("{}\n{}\n", data_line("Hel"), data_line("lo"));
        assert_eq!(decoder.push(body.as_bytes()), vec!["Hel", "lo"]);
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn test_line_split_across_chunks() {
        let mut decoder = FragmentDecoder::new();
        let line = data_line("Bardo");
        let (a, b) = line.as_bytes().split_at(17);

        assert!(decoder.push(a).is_empty());
        assert_eq!(decoder.push(b), vec!["Bardo"]);
    }

    #[test]
    fn test_multibyte_split_across_chunks() {
        let mut decoder = FragmentDecoder::new();
        let line = data_line("متحف");
        let bytes = line.as_bytes();
        // Split inside the first Arabic code point.
        let cut = line.find('م').unwrap() + 1;

        assert!(decoder.push(&bytes[..cut]).is_empty());
        assert_eq!(decoder.push(&bytes[cut..]), vec!["متحف"]);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let mut decoder = FragmentDecoder::new();
        let body = format!("data: bad-line\n{}", data_line("Hi"));

        assert_eq!(decoder.push(body.as_bytes()), vec!["Hi"]);
        assert_eq!(decoder.skipped(), 1);
    }

    #[test]
    fn test_bare_lines_without_marker() {
        let mut decoder = FragmentDecoder::new();
        let body = "bad-line\n{\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Hi\"}]}}]}\n";

        assert_eq!(decoder.push(body.as_bytes()), vec!["Hi"]);
        assert_eq!(decoder.skipped(), 1);
    }

    #[test]
    fn test_chunk_without_text_is_not_malformed() {
        let mut decoder = FragmentDecoder::new();
        let body = "data: {\"candidates\":[{\"finishReason\":\"STOP\"}],\"usageMetadata\":{}}\n";

        assert!(decoder.push(body.as_bytes()).is_empty());
        assert_eq!(decoder.skipped(), 0);
    }

    #[test]
    fn test_sse_fields_and_comments_ignored() {
        let mut decoder = FragmentDecoder::new();
        let body = ": keep-alive\nevent: message\nid: 7\n\ndata: [DONE]\n";

        assert!(decoder.push(body.as_bytes()).is_empty());
        assert_eq!(decoder.skipped(), 0);
    }

    #[test]
    fn test_finish_flushes_trailing_line() {
        let mut decoder = FragmentDecoder::new();
        let line = data_line("tail");
        let unterminated = line.trim_end_matches('\n');

        assert!(decoder.push(unterminated.as_bytes()).is_empty());
        assert_eq!(decoder.finish().as_deref(), Some("tail"));
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut decoder = FragmentDecoder::new();
        let body = data_line("win").replace('\n', "\r\n");

        assert_eq!(decoder.push(body.as_bytes()), vec!["win"]);
    }
}
