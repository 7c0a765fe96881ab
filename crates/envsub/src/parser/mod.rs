//! `.env` document parser.
//!
//! Parses `.env` text into an ordered sequence of entries whose values carry
//! interpolation references as typed nodes rather than marker substrings.
//! [`parse_document`] is the entry point; resolving the references against
//! earlier entries is the `resolver` module's concern.

pub mod ast;
pub mod error;
mod document;

pub use ast::*;
pub use document::parse_document;
pub use error::{ParseError, ParseErrorKind};
