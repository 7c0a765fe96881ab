//! `.env` grammar using winnow.
//!
//! Recognizes assignment lines with an optional inert `export` prefix, three
//! value modes (unquoted, single-quoted, double-quoted), full-line and
//! trailing `#` comments, and `$NAME` / `${NAME}` interpolation references
//! inside interpolation-eligible values.
//!
//! Values never span lines. Unterminated quotes and malformed `${...}`
//! references abort the line they appear on; the document loop reports them
//! at the position of the construct that failed, with the whole unparsed
//! tail as the remainder.

use super::ast::{Document, Entry, RawValue, ValuePart};
use super::error::{ParseError, ParseErrorKind};
use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::error::{AddContext, ContextError, ErrMode, StrContext};
use winnow::prelude::*;
use winnow::stream::Stream;
use winnow::token::{any, take_while};

const UNTERMINATED_SINGLE_QUOTE: &str = "unterminated single-quoted value";
const UNTERMINATED_DOUBLE_QUOTE: &str = "unterminated double-quoted value";
const UNTERMINATED_REFERENCE: &str = "unterminated braced reference";
const INVALID_REFERENCE: &str = "invalid braced reference name";

/// Parse a complete `.env` input into a [`Document`].
///
/// Consumes entries until the input is exhausted or a line fails to match
/// the grammar. Any unconsumed remainder is an error: partial success is
/// not success.
pub fn parse_document(input: &str) -> Result<Document, ParseError> {
    let mut remaining = input;
    let mut entries = Vec::new();

    loop {
        let _ = skip_trivia(&mut remaining);
        if remaining.is_empty() {
            return Ok(Document { entries });
        }

        // Parse the next assignment on a scratch cursor so the remainder
        // reported on failure still starts at the beginning of the line,
        // while the position reflects how far the grammar got.
        let mut attempt = remaining;
        match assignment(&mut attempt) {
            Ok(entry) => {
                entries.push(entry);
                remaining = attempt;
            }
            Err(err) => {
                let (line, column) = position_at(input, attempt);
                return Err(ParseError::new(line, column, stop_kind(&err), remaining));
            }
        }
    }
}

/// Calculate the 1-based line and column of the boundary between consumed
/// input and `remaining`.
fn position_at(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let before = &original[..consumed];
    let line = before.bytes().filter(|&byte| byte == b'\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(newline) => consumed - newline,
        None => consumed + 1,
    };
    (line, column)
}

/// Map a grammar failure to the error kind it represents.
///
/// The quoted-value and braced-reference parsers fail with a labeled cut;
/// everything else is an unrecognized line.
fn stop_kind(err: &ErrMode<ContextError>) -> ParseErrorKind {
    let ErrMode::Cut(ctx) = err else {
        return ParseErrorKind::UnrecognizedInput;
    };
    let label = ctx.context().find_map(|entry| match entry {
        StrContext::Label(label) => Some(*label),
        _ => None,
    });
    match label {
        Some(UNTERMINATED_SINGLE_QUOTE | UNTERMINATED_DOUBLE_QUOTE) => {
            ParseErrorKind::UnterminatedQuote
        }
        Some(UNTERMINATED_REFERENCE | INVALID_REFERENCE) => ParseErrorKind::MalformedReference,
        _ => ParseErrorKind::UnrecognizedInput,
    }
}

/// Skip whitespace (including newlines) and `#` comments.
///
/// A trailing comment after a value and a full-line comment are the same
/// construct from here: everything from `#` to the end of the line.
fn skip_trivia(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((whitespace.void(), comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse at least one whitespace character.
fn whitespace<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., char::is_whitespace).parse_next(input)
}

/// Parse a `#` comment running to the end of the line.
fn comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded('#', take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse one assignment: `[export] IDENTIFIER '=' value`.
fn assignment(input: &mut &str) -> ModalResult<Entry> {
    // `export` only counts as a prefix when followed by inline whitespace;
    // otherwise it is the start of an ordinary key like `exported`.
    let _: Option<(&str, &str)> =
        opt(("export", take_while(1.., is_inline_space))).parse_next(input)?;
    let key = identifier(input)?;
    '='.parse_next(input)?;
    let value = raw_value(input)?;
    Ok(Entry { key, value })
}

fn is_inline_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Parse a value in the mode selected by the character after `=`.
fn raw_value(input: &mut &str) -> ModalResult<RawValue> {
    let parts = if input.starts_with('\'') {
        single_quoted(input)?
    } else if input.starts_with('"') {
        double_quoted(input)?
    } else {
        unquoted(input)?
    };
    Ok(RawValue {
        parts: merge_literals(parts),
    })
}

/// Parse a single-quoted value. Everything up to the closing quote is
/// literal; `$` has no meaning here.
fn single_quoted(input: &mut &str) -> ModalResult<Vec<ValuePart>> {
    let opening = input.checkpoint();
    '\''.parse_next(input)?;
    let body: &str = take_while(0.., |c| c != '\'' && c != '\n').parse_next(input)?;
    if opt('\'').parse_next(input)?.is_none() {
        input.reset(&opening);
        return Err(ErrMode::Cut(ContextError::new().add_context(
            &*input,
            &opening,
            StrContext::Label(UNTERMINATED_SINGLE_QUOTE),
        )));
    }
    if body.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(vec![ValuePart::Literal(body.to_string())])
    }
}

/// Parse a double-quoted value; references are recognized inside it.
fn double_quoted(input: &mut &str) -> ModalResult<Vec<ValuePart>> {
    let opening = input.checkpoint();
    '"'.parse_next(input)?;
    let parts: Vec<ValuePart> = repeat(0.., double_quoted_part).parse_next(input)?;
    if opt('"').parse_next(input)?.is_none() {
        input.reset(&opening);
        return Err(ErrMode::Cut(ContextError::new().add_context(
            &*input,
            &opening,
            StrContext::Label(UNTERMINATED_DOUBLE_QUOTE),
        )));
    }
    Ok(parts)
}

/// Parse one segment of a double-quoted body.
fn double_quoted_part(input: &mut &str) -> ModalResult<ValuePart> {
    alt((reference, double_quoted_literal, dollar_literal)).parse_next(input)
}

/// Parse a literal run inside a double-quoted value.
fn double_quoted_literal(input: &mut &str) -> ModalResult<ValuePart> {
    take_while(1.., |c| c != '"' && c != '$' && c != '\n')
        .map(|text: &str| ValuePart::Literal(text.to_string()))
        .parse_next(input)
}

/// Parse an unquoted value: segments up to whitespace, `#`, or end of line.
fn unquoted(input: &mut &str) -> ModalResult<Vec<ValuePart>> {
    repeat(0.., unquoted_part).parse_next(input)
}

/// Parse one segment of an unquoted value.
fn unquoted_part(input: &mut &str) -> ModalResult<ValuePart> {
    alt((reference, unquoted_literal, dollar_literal)).parse_next(input)
}

/// Parse a literal run inside an unquoted value.
fn unquoted_literal(input: &mut &str) -> ModalResult<ValuePart> {
    take_while(1.., |c: char| !c.is_whitespace() && c != '#' && c != '$')
        .map(|text: &str| ValuePart::Literal(text.to_string()))
        .parse_next(input)
}

/// Parse a `$` that starts no reference, kept as literal text.
fn dollar_literal(input: &mut &str) -> ModalResult<ValuePart> {
    '$'.map(|_| ValuePart::Literal("$".to_string()))
        .parse_next(input)
}

/// Parse an interpolation reference: `${NAME}` or `$NAME`.
fn reference(input: &mut &str) -> ModalResult<ValuePart> {
    alt((braced_reference, bare_reference)).parse_next(input)
}

/// Parse a `${NAME}` reference.
///
/// Once `${` is seen the form is committed: a missing name or missing `}`
/// fails the whole value, reported at the `$`.
fn braced_reference(input: &mut &str) -> ModalResult<ValuePart> {
    let dollar = input.checkpoint();
    "${".parse_next(input)?;
    let Some(name) = opt(identifier).parse_next(input)? else {
        input.reset(&dollar);
        return Err(ErrMode::Cut(ContextError::new().add_context(
            &*input,
            &dollar,
            StrContext::Label(INVALID_REFERENCE),
        )));
    };
    if opt('}').parse_next(input)?.is_none() {
        input.reset(&dollar);
        return Err(ErrMode::Cut(ContextError::new().add_context(
            &*input,
            &dollar,
            StrContext::Label(UNTERMINATED_REFERENCE),
        )));
    }
    Ok(ValuePart::Reference(name))
}

/// Parse a `$NAME` reference; the name extends as far as the identifier
/// grammar allows.
fn bare_reference(input: &mut &str) -> ModalResult<ValuePart> {
    '$'.parse_next(input)?;
    identifier.map(ValuePart::Reference).parse_next(input)
}

/// Parse an identifier: `[A-Za-z_][A-Za-z0-9_]*`.
fn identifier(input: &mut &str) -> ModalResult<String> {
    let first = any.parse_next(input)?;
    if !is_identifier_start(first) {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    let rest: &str = take_while(0.., is_identifier_continue).parse_next(input)?;
    let mut name = String::with_capacity(1 + rest.len());
    name.push(first);
    name.push_str(rest);
    Ok(name)
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Merge adjacent literal parts so stray `$` fallbacks read as one run.
fn merge_literals(parts: Vec<ValuePart>) -> Vec<ValuePart> {
    let mut merged = Vec::with_capacity(parts.len());

    for part in parts {
        match part {
            ValuePart::Literal(text) => {
                if let Some(ValuePart::Literal(previous)) = merged.last_mut() {
                    previous.push_str(&text);
                } else {
                    merged.push(ValuePart::Literal(text));
                }
            }
            other @ ValuePart::Reference(_) => merged.push(other),
        }
    }

    merged
}
