//! Report layout
//!
//! The report is built from separate pieces so the header can be printed
//! before the book is read, and the failure lines can replace the
//! statistics when reading fails.

use super::formatters::{letter_lines, separator};
use crate::books::BookError;
use crate::core::RankedEntry;
use std::path::Path;

pub const BANNER: &str = "============ BOOKBOT ============";
pub const WORD_COUNT_HEADER: &str = "----------- Word Count ----------";
pub const CHARACTER_COUNT_HEADER: &str = "--------- Character Count -------";
pub const FOOTER: &str = "============= END ===============";

/// Banner, analyzing line and separator
#[must_use]
pub fn header_lines(path: &Path) -> Vec<String> {
    vec![
        BANNER.to_string(),
        format!("Analyzing book found at {}...", path.display()),
        separator(),
    ]
}

/// Word-count and character-count sections
///
/// Only letters are listed in the character section.
#[must_use]
pub fn stats_lines(word_count: usize, ranked: &[RankedEntry]) -> Vec<String> {
    let mut lines = vec![
        WORD_COUNT_HEADER.to_string(),
        format!("Found {word_count} total words"),
        separator(),
        CHARACTER_COUNT_HEADER.to_string(),
    ];
    lines.extend(letter_lines(ranked));
    lines
}

/// Error lines shown in place of the statistics
#[must_use]
pub fn failure_lines(error: &BookError) -> Vec<String> {
    match error {
        BookError::NotFound { .. } => vec![
            format!(
                "Error: The book at '{}' was not found.",
                error.path().display()
            ),
            "Ensure the file exists and the path is correct.".to_string(),
        ],
        BookError::Read { source, .. } => {
            vec![format!("An error occurred while reading the file: {source}")]
        }
    }
}

/// The complete report for a successfully read book
///
/// # Examples
/// ```
/// use bookbot::core::RankedEntry;
/// use bookbot::output::format_report;
/// use std::path::Path;
///
/// let ranked = [RankedEntry::new('b', 2), RankedEntry::new('.', 1)];
/// let lines = format_report(Path::new("book.txt"), 1, &ranked);
/// assert_eq!(lines[1], "Analyzing book found at book.txt...");
/// assert!(lines.contains(&"b: 2".to_string()));
/// assert!(!lines.contains(&".: 1".to_string()));
/// ```
#[must_use]
pub fn format_report(path: &Path, word_count: usize, ranked: &[RankedEntry]) -> Vec<String> {
    let mut lines = header_lines(path);
    lines.extend(stats_lines(word_count, ranked));
    lines.push(FOOTER.to_string());
    lines
}
