//! Text splitting for the speech endpoint
//!
//! The Google Translate speech endpoint rejects long inputs, so text is sent
//! in chunks of at most [`MAX_CHUNK_CHARS`] characters. Cuts prefer sentence
//! boundaries, then clause boundaries, then whitespace.

/// Longest chunk the speech endpoint accepts
pub const MAX_CHUNK_CHARS: usize = 100;

const SENTENCE_ENDINGS: &[char] = &['.', '!', '?', '…', '\n'];
const CLAUSE_BREAKS: &[char] = &[',', ';', ':', '—', '–', ')'];

/// Split text into speakable chunks of at most `max_chars` characters
///
/// Chunks are trimmed. Chunks with no alphanumeric characters are dropped
/// since the endpoint has nothing to pronounce for them.
#[must_use]
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut remaining = text.trim();

    while !remaining.is_empty() {
        let Some((limit, _)) = remaining.char_indices().nth(max_chars) else {
            push_speakable(&mut chunks, remaining);
            break;
        };

        let cut = find_cut(&remaining[..limit]).unwrap_or(limit);
        let (chunk, rest) = remaining.split_at(cut);
        push_speakable(&mut chunks, chunk);
        remaining = rest.trim_start();
    }

    chunks
}

/// Byte offset to cut the window at, or `None` for a hard cut
fn find_cut(window: &str) -> Option<usize> {
    let after = |(idx, c): (usize, char)| idx + c.len_utf8();

    if let Some(found) = last_match(window, SENTENCE_ENDINGS) {
        return Some(after(found));
    }
    if let Some(found) = last_match(window, CLAUSE_BREAKS) {
        return Some(after(found));
    }

    window
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(idx, _)| idx)
        .filter(|idx| *idx > 0)
}

fn last_match(window: &str, set: &[char]) -> Option<(usize, char)> {
    window.char_indices().rev().find(|(_, c)| set.contains(c))
}

fn push_speakable(chunks: &mut Vec<String>, chunk: &str) {
    let chunk = chunk.trim();
    if chunk.chars().any(char::is_alphanumeric) {
        chunks.push(chunk.to_string());
    }
}
