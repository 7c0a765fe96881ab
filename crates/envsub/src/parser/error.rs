//! Parse error type for `.env` documents.

use thiserror::Error;

/// Maximum number of characters shown from the unconsumed remainder.
const PREVIEW_CHARS: usize = 20;

/// Classification of why parsing stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A single- or double-quoted value never found its closing quote on the
    /// line where it opened.
    UnterminatedQuote,
    /// A `${` reference without a matching `}` or without a valid name.
    MalformedReference,
    /// A non-blank, non-comment line that matches no recognized form, or any
    /// other unconsumed trailing input.
    UnrecognizedInput,
}

/// An error describing where and why `.env` parsing stopped.
///
/// The rendered message is uniform across kinds:
/// `Parse error at line L, column C: could not parse remaining input
/// starting with: "..."`. Lines are 1-based; the column is the number of
/// characters consumed since the last newline, plus one. For unterminated
/// quotes the position is the opening quote; for malformed references it is
/// the `$` that started the reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Parse error at line {line}, column {column}: could not parse remaining input starting with: \"{preview}\""
)]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub kind: ParseErrorKind,
    /// First 20 characters of the trimmed remainder, with `...` appended
    /// when the remainder was longer.
    pub preview: String,
}

impl ParseError {
    pub(crate) fn new(line: usize, column: usize, kind: ParseErrorKind, remainder: &str) -> Self {
        Self {
            line,
            column,
            kind,
            preview: preview_of(remainder),
        }
    }
}

/// Build the truncated remainder preview for an error message.
fn preview_of(remainder: &str) -> String {
    let trimmed = remainder.trim();
    let mut preview: String = trimmed.chars().take(PREVIEW_CHARS).collect();
    if preview.chars().count() < trimmed.chars().count() {
        preview.push_str("...");
    }
    preview
}
