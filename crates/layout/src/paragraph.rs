//! Paragraph splitting and greedy word wrap

use crate::Result;
use regex::Regex;
use std::sync::OnceLock;

/// A newline followed by one or more blank (or whitespace-only) lines
fn paragraph_break() -> &'static Regex {
    static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();
    PARAGRAPH_BREAK.get_or_init(|| {
        Regex::new(r"\n(?:[^\S\n]*\n)+").expect("paragraph break pattern is valid")
    })
}

/// Split text into paragraphs on blank-line boundaries
///
/// Any run of blank lines is one boundary. Single newlines stay inside the
/// paragraph and reflow like spaces. A boundary at the very start or end of
/// the text yields an empty paragraph there.
///
/// # Example
/// ```
/// use story_layout::paragraph::split_paragraphs;
///
/// let paragraphs = split_paragraphs("Il était\nune fois.\n\n\n\nLa fin.");
/// assert_eq!(paragraphs, vec!["Il était\nune fois.", "La fin."]);
/// ```
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    paragraph_break()
        .split(&text)
        .map(str::to_string)
        .collect()
}

/// Break text into lines no wider than `max_width`
///
/// Words are taken greedily. A candidate line that measures exactly
/// `max_width` still fits. A word wider than `max_width` on its own is kept
/// whole on a line by itself.
///
/// `measure` returns the rendered width of a candidate line.
pub fn wrap_words<F>(text: &str, max_width: f64, mut measure: F) -> Result<Vec<String>>
where
    F: FnMut(&str) -> Result<f64>,
{
    let mut lines = Vec::new();
    let mut buffer = String::new();

    for word in text.split_whitespace() {
        let candidate = if buffer.is_empty() {
            word.to_string()
        } else {
            format!("{buffer} {word}")
        };

        if measure(&candidate)? > max_width && !buffer.is_empty() {
            lines.push(std::mem::replace(&mut buffer, word.to_string()));
        } else {
            buffer = candidate;
        }
    }

    if !buffer.is_empty() {
        lines.push(buffer);
    }

    Ok(lines)
}
