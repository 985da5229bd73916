//! Splitting of oversized messages.

/// Default chunk size, in characters. Keeps each line below the platform's
/// per-entry limit.
pub const MAX_CHUNK_LEN: usize = 3800;

/// Split `message` into consecutive pieces of at most `max` characters.
///
/// Pieces never split a character, and concatenating them in order yields
/// `message`. A `max` of zero returns the whole message as one piece.
pub fn split_chunks(message: &str, max: usize) -> Vec<&str> {
    if max == 0 || message.is_empty() {
        return vec![message];
    }

    let mut chunks = Vec::new();
    let mut rest = message;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(max)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }
    chunks
}

/// Whether `message` needs more than one chunk.
pub fn needs_split(message: &str, max: usize) -> bool {
    // Byte length bounds char count from above
    max > 0 && message.len() > max && message.chars().count() > max
}
