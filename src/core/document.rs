//! Document representation
//!
//! A Document is the immutable text of one book, read once and then analyzed.

/// The full text of a book
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    text: String,
}

impl Document {
    /// Create a document from text
    ///
    /// # Examples
    /// ```
    /// use bookbot::core::Document;
    ///
    /// let doc = Document::new("Call me Ishmael.");
    /// assert_eq!(doc.as_str(), "Call me Ishmael.");
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the document as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters (not bytes) in the document
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Lowercased copy of the text, using full Unicode case mapping
    #[must_use]
    pub fn lowercased(&self) -> String {
        self.text.to_lowercase()
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Count the words in a document
///
/// A word is a maximal run of non-whitespace characters.
///
/// # Examples
/// ```
/// use bookbot::core::{Document, count_words};
///
/// assert_eq!(count_words(&Document::new("Bb. Aa!")), 2);
/// assert_eq!(count_words(&Document::new("  \n\t ")), 0);
/// ```
#[must_use]
pub fn count_words(doc: &Document) -> usize {
    doc.as_str().split_whitespace().count()
}
