//! Character frequency counting and ranking
//!
//! The table keeps keys in first-seen order so that ranking can break ties
//! deterministically, independent of hash iteration order.

use super::Document;
use rustc_hash::FxHashMap;
use std::fmt;

/// Occurrence count per lowercased character
///
/// Every character is counted, including whitespace, digits and punctuation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFrequencyTable {
    entries: Vec<(char, usize)>,
    index: FxHashMap<char, usize>,
}

impl CharacterFrequencyTable {
    /// Record one occurrence of `ch`
    fn record(&mut self, ch: char) {
        if let Some(&slot) = self.index.get(&ch) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(ch, self.entries.len());
            self.entries.push((ch, 1));
        }
    }

    /// Count for a character, `None` if it never occurred
    #[inline]
    #[must_use]
    pub fn get(&self, ch: char) -> Option<usize> {
        self.index.get(&ch).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Iterate `(char, count)` pairs in first-seen order
    pub fn iter(&self) -> Iter<'_> {
        self.entries.iter().copied()
    }
}

/// Iterator over `(char, count)` pairs in first-seen order
pub type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, (char, usize)>>;

impl<'a> IntoIterator for &'a CharacterFrequencyTable {
    type Item = (char, usize);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A character with its count, positioned by rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry {
    pub character: char,
    pub count: usize,
}

impl RankedEntry {
    #[must_use]
    pub const fn new(character: char, count: usize) -> Self {
        Self { character, count }
    }

    /// Whether the character is a letter
    #[inline]
    #[must_use]
    pub fn is_alphabetic(&self) -> bool {
        self.character.is_alphabetic()
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.character, self.count)
    }
}

/// Count every character of the lowercased document
///
/// # Examples
/// ```
/// use bookbot::core::{Document, count_characters};
///
/// let table = count_characters(&Document::new("Bb. Aa!"));
/// assert_eq!(table.get('b'), Some(2));
/// assert_eq!(table.get(' '), Some(1));
/// assert_eq!(table.get('B'), None);
/// ```
#[must_use]
pub fn count_characters(doc: &Document) -> CharacterFrequencyTable {
    doc.lowercased()
        .chars()
        .fold(CharacterFrequencyTable::default(), |mut table, ch| {
            table.record(ch);
            table
        })
}

/// Rank characters by descending count
///
/// Equal counts keep the order in which the characters were first seen.
/// `sort_by` is stable, so sorting the first-seen list is enough.
#[must_use]
pub fn rank_characters(table: &CharacterFrequencyTable) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = table
        .iter()
        .map(|(character, count)| RankedEntry::new(character, count))
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}
