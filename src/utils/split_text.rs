use unicode_segmentation::UnicodeSegmentation;

/// Splits `text` into trimmed, word-bounded chunks of up to `max_length`
/// *graphemes* each, ensuring you never break a Unicode character in half.
///
/// Each chunk prefers to end at the last ASCII space inside its window; when
/// a run of non-space characters is longer than `max_length`, the cut is
/// forced at exactly `max_length` graphemes instead. Tabs and newlines stay
/// inside chunks and are never used as split points.
///
/// Empty or whitespace-only input, or a `max_length` of zero, produces no
/// chunks at all.
pub fn split_text_into_chunks(text: &str, max_length: usize) -> Vec<String> {
    if max_length == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut remaining = text.trim();

    while !remaining.is_empty() {
        // Byte offset just past a window of `max_length` graphemes.
        // If no grapheme follows the window, everything left fits in one chunk.
        let window_end = match remaining.grapheme_indices(true).nth(max_length) {
            Some((offset, _)) => offset,
            None => {
                chunks.push(remaining.to_string());
                break;
            }
        };

        let window = &remaining[..window_end];

        // If no space is found, or the only space is at the start, we must cut the word
        let cut = match window.rfind(' ') {
            Some(idx) if idx > 0 => idx,
            _ => window_end,
        };

        chunks.push(remaining[..cut].trim().to_string());
        remaining = remaining[cut..].trim();
    }

    chunks
}

/// Grapheme count of `text`, the unit `split_text_into_chunks` measures in.
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}
