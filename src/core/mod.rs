//! Core domain types for text statistics
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is a pure function of the document text.

mod document;
mod frequency;

pub use document::{Document, count_words};
pub use frequency::{CharacterFrequencyTable, RankedEntry, count_characters, rank_characters};
