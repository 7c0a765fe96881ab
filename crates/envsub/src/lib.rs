//! Parse `.env` text into resolved key/value maps.
//!
//! [`parse`] is the core operation: it recognizes assignment lines (optional
//! `export` prefix, unquoted / single-quoted / double-quoted values, `#`
//! comments) and resolves `$NAME` and `${NAME}` references top to bottom, so
//! each value sees only the entries defined above it. It performs no I/O and
//! never touches the process environment.
//!
//! ```
//! let vars = envsub::parse("HOST=localhost\nURL=http://$HOST/api").unwrap();
//! assert_eq!(vars["HOST"], "localhost");
//! assert_eq!(vars["URL"], "http://localhost/api");
//! ```
//!
//! Reading `.env` files from disk ([`loader`]) and applying maps to an
//! environment ([`env`]) are separate modules; compose them with `parse`
//! through ordinary explicit imports.

pub mod env;
pub mod loader;
pub mod parser;
pub mod resolver;

use std::collections::HashMap;

pub use env::{ApplyReport, EnvTarget};
pub use loader::{LoadError, load_default, load_path};
pub use parser::{
    Document, Entry, ParseError, ParseErrorKind, RawValue, ValuePart, parse_document,
};
pub use resolver::resolve;

/// Parse `.env` text and resolve every interpolation reference.
///
/// Entries resolve in file order against earlier entries only: forward and
/// unknown references become the empty string, and later entries for the
/// same key overwrite earlier ones in the returned map.
///
/// # Errors
///
/// Returns a [`ParseError`] when any input remains unconsumed: an
/// unrecognized line, an unterminated quoted value, or a malformed `${...}`
/// reference. The error message carries the 1-based line and column where
/// parsing stopped and a preview of the offending text.
pub fn parse(input: &str) -> Result<HashMap<String, String>, ParseError> {
    let document = parser::parse_document(input)?;
    Ok(resolver::resolve(&document))
}

/// Parse `.env` text, panicking on failure.
///
/// Success behavior is identical to [`parse`]; on failure this panics with
/// exactly the message [`parse`] would have returned. Intended for program
/// edges where a parse failure is fatal anyway.
///
/// # Panics
///
/// Panics if [`parse`] returns an error.
#[must_use]
pub fn parse_or_fail(input: &str) -> HashMap<String, String> {
    match parse(input) {
        Ok(vars) => vars,
        Err(err) => panic!("{err}"),
    }
}
