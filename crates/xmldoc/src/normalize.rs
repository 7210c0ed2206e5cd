//! Text normalization for documentation text and code blobs.
//!
//! Documentation generators copy comment text into the XML file with the
//! source's indentation and line wrapping intact, and wrap it in blank lines.
//! [`normalize`] strips those artifacts:
//!
//! - blank lines at the start and end are dropped;
//! - a common indentation is removed, measured on the first remaining line;
//! - prose is re-flowed onto a single line, code keeps its line breaks.
//!
//! Indentation of four columns or less (without a leading tab) is treated as
//! intentional content, not generator noise, and is left alone.

/// Indentation at or below this width is considered part of the content.
const MAX_CONTENT_INDENT: usize = 4;

/// How a blob of text should be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Flowing prose: lines are joined with a single space.
    PlainText,
    /// Code: lines are joined with `\n`.
    Code,
}

/// Normalize a raw text blob.
///
/// ```rust
/// use xmldoc::normalize::{normalize, TextMode};
///
/// let raw = "\n            Gets the value\n            of the thing.\n        ";
/// assert_eq!(normalize(raw, TextMode::PlainText), "Gets the value of the thing.");
/// ```
pub fn normalize(text: &str, mode: TextMode) -> String {
    let lines: Vec<&str> = text.lines().collect();

    let Some(first) = lines.iter().position(|line| !is_blank(line)) else {
        return String::new();
    };
    // A non-blank first line means a non-blank last line exists too.
    let last = lines.iter().rposition(|line| !is_blank(line)).unwrap_or(first);
    let lines = &lines[first..=last];

    let indent = indentation(lines[0]);
    let stripped = lines.iter().map(|line| strip_columns(line, indent));

    let separator = match mode {
        TextMode::PlainText => " ",
        TextMode::Code => "\n",
    };
    stripped.collect::<Vec<_>>().join(separator)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Width of the generator-inserted indentation, judged from `line`.
fn indentation(line: &str) -> usize {
    let width = line.chars().take_while(|c| c.is_whitespace()).count();
    if width <= MAX_CONTENT_INDENT && !line.starts_with('\t') {
        0
    } else {
        width
    }
}

/// Drop exactly `count` leading characters; shorter lines become empty.
fn strip_columns(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}
