//! Book loading utilities

use super::BookError;
use crate::core::Document;
use std::fs;
use std::path::Path;

/// Load the full text of a book
///
/// The file is opened, read completely as UTF-8 and closed before returning.
///
/// # Errors
///
/// Returns [`BookError::NotFound`] if the path does not exist and
/// [`BookError::Read`] for any other I/O or decoding failure.
///
/// # Examples
/// ```no_run
/// use bookbot::books::load_text;
///
/// let doc = load_text("books/frankenstein.txt").unwrap();
/// println!("Loaded {} characters", doc.len_chars());
/// ```
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<Document, BookError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| BookError::from_io(path, e))?;
    log::debug!("loaded {} bytes from {}", text.len(), path.display());
    Ok(Document::from(text))
}
