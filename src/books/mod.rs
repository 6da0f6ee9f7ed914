//! Book loading
//!
//! Reads a book from disk into a [`Document`](crate::core::Document).

mod error;
pub mod loader;

pub use error::BookError;
pub use loader::load_text;
