use super::search_largest;
use crate::measure::{width_of_text, Measure};
use crate::units::Px;
use crate::FitError;
use unicode_segmentation::UnicodeSegmentation;

/// Greedily wraps `text` into lines no wider than `max_width` at the given size.
///
/// # Wrapping Behavior
///
/// Hard line breaks split the text into paragraphs; blank paragraphs are
/// dropped and the rest are trimmed. Within a paragraph, words (runs of
/// non-whitespace) are packed onto the current line, joined by single spaces,
/// for as long as the line still fits. A word that does not fit on a line of
/// its own is broken into chunks with [`split_word`]: every chunk but the last
/// becomes a full line, and the last chunk starts the next line.
///
/// Lines are returned in reading order. The result is never empty: if the
/// text contains no words at all, it is returned untouched as the only line,
/// and that line is not guaranteed to fit.
pub fn wrap<M: Measure + ?Sized>(
    oracle: &M,
    text: &str,
    angle: f32,
    size: u32,
    max_width: Px,
) -> Result<Vec<String>, FitError> {
    let fits = |candidate: &str| -> Result<bool, FitError> {
        Ok(width_of_text(oracle, size, angle, candidate)? <= max_width)
    };

    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.lines().map(str::trim).filter(|p| !p.is_empty()) {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            if !current.is_empty() {
                let candidate = format!("{current} {word}");
                if fits(&candidate)? {
                    current = candidate;
                    continue;
                }
                lines.push(std::mem::take(&mut current));
            }

            if fits(word)? {
                current = word.to_string();
                continue;
            }

            // the word is too long for any line, so it gets broken up
            let mut chunks = split_word(oracle, word, angle, size, max_width)?;
            current = chunks.pop().unwrap_or_default();
            lines.extend(chunks);
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(text.to_string());
    }

    Ok(lines)
}

/// Breaks a single word into chunks that each fit within `max_width`.
///
/// Starting from the front of the word, the longest prefix that fits is found
/// by binary search, emitted, and the search repeats on the rest. Chunks are
/// made of whole grapheme clusters and always hold at least one, so a glyph
/// wider than `max_width` still makes progress (as an overflowing chunk of
/// its own). The chunks concatenate back to `word` exactly.
pub fn split_word<M: Measure + ?Sized>(
    oracle: &M,
    word: &str,
    angle: f32,
    size: u32,
    max_width: Px,
) -> Result<Vec<String>, FitError> {
    // byte offset of every grapheme boundary, including the end of the word
    let mut bounds: Vec<usize> = word.grapheme_indices(true).map(|(i, _)| i).collect();
    bounds.push(word.len());
    let count = bounds.len() - 1;

    let mut chunks = Vec::new();
    let mut pos = 0usize;
    while pos < count {
        let start = bounds[pos];
        let longest = search_largest(1, (count - pos) as u32, |len| {
            let piece = &word[start..bounds[pos + len as usize]];
            let fits = width_of_text(oracle, size, angle, piece)? <= max_width;
            Ok::<_, FitError>(fits.then_some(()))
        })?;
        let len = longest.map(|(len, ())| len as usize).unwrap_or(1);

        chunks.push(word[start..bounds[pos + len]].to_string());
        pos += len;
    }

    Ok(chunks)
}
