//! Formatting utilities for report lines

use crate::core::RankedEntry;

/// Width of the plain separator line
pub const SEPARATOR_WIDTH: usize = 30;

/// A line of `-` of the standard width
#[must_use]
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Format a ranked entry as `{char}: {count}`
#[must_use]
pub fn entry_line(entry: &RankedEntry) -> String {
    entry.to_string()
}

/// Lines for the letters among the ranked entries, rank order preserved
pub fn letter_lines(ranked: &[RankedEntry]) -> impl Iterator<Item = String> + '_ {
    ranked
        .iter()
        .filter(|entry| entry.is_alphabetic())
        .map(entry_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_is_thirty_dashes() {
        let line = separator();
        assert_eq!(line.len(), 30);
        assert!(line.chars().all(|c| c == '-'));
    }

    #[test]
    fn entry_line_format() {
        assert_eq!(entry_line(&RankedEntry::new('t', 29493)), "t: 29493");
    }

    #[test]
    fn letter_lines_skip_non_letters() {
        let ranked = [
            RankedEntry::new(' ', 9),
            RankedEntry::new('e', 5),
            RankedEntry::new('1', 4),
            RankedEntry::new('.', 3),
            RankedEntry::new('ß', 2),
            RankedEntry::new('\n', 1),
        ];
        let lines: Vec<String> = letter_lines(&ranked).collect();
        assert_eq!(lines, vec!["e: 5", "ß: 2"]);
    }
}
