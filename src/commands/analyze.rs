//! Book analysis command
//!
//! Runs the statistics pipeline over a loaded document.

use crate::core::{
    CharacterFrequencyTable, Document, RankedEntry, count_characters, count_words,
    rank_characters,
};
use crate::output::{format_report, stats_lines};
use std::path::Path;

/// Result of analyzing a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStats {
    pub word_count: usize,
    /// Every character counted, letters or not
    pub table: CharacterFrequencyTable,
    pub ranked: Vec<RankedEntry>,
}

impl TextStats {
    /// Word-count and character-count sections of the report
    #[must_use]
    pub fn stats_lines(&self) -> Vec<String> {
        stats_lines(self.word_count, &self.ranked)
    }

    /// The full report, banner to footer
    #[must_use]
    pub fn report_lines(&self, path: &Path) -> Vec<String> {
        format_report(path, self.word_count, &self.ranked)
    }
}

/// Compute word count, character table and ranking for a document
///
/// # Examples
/// ```
/// use bookbot::commands::analyze;
/// use bookbot::core::{Document, RankedEntry};
///
/// let stats = analyze(&Document::new("Bb. Aa!"));
/// assert_eq!(stats.word_count, 2);
/// assert_eq!(stats.ranked[0], RankedEntry::new('b', 2));
/// assert_eq!(stats.ranked[1], RankedEntry::new('a', 2));
/// ```
#[must_use]
pub fn analyze(doc: &Document) -> TextStats {
    let word_count = count_words(doc);
    let table = count_characters(doc);
    let ranked = rank_characters(&table);

    log::debug!(
        "analyzed {} chars: {word_count} words, {} distinct characters",
        doc.len_chars(),
        table.len()
    );

    TextStats {
        word_count,
        table,
        ranked,
    }
}
