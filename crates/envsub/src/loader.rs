//! `.env` file loading.
//!
//! A thin collaborator around [`crate::parse`]: it reads a file, hands the
//! contents to the parser, and returns the resolved map. What to do with
//! the map (apply it to an environment, print it, validate it) stays with
//! the caller.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::ParseError;

/// An error produced while loading a `.env` file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read as UTF-8 text.
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The contents failed to parse; the parser message passes through
    /// verbatim.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Load and resolve the `.env` file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read and
/// [`LoadError::Parse`] when its contents fail to parse.
pub fn load_path(path: impl AsRef<Path>) -> Result<HashMap<String, String>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(crate::parse(&text)?)
}

/// Load and resolve `.env` from the current working directory.
///
/// # Errors
///
/// Same as [`load_path`].
pub fn load_default() -> Result<HashMap<String, String>, LoadError> {
    load_path(".env")
}
