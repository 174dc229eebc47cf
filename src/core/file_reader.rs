//! Strict file reading
//!
//! Reads whole files as UTF-8. Anything that prevents producing text -
//! an I/O failure or invalid UTF-8 content - surfaces as a typed error
//! for the caller to handle at file granularity.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a file could not be read as text.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Read an entire file as UTF-8 text.
pub fn read_file_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
