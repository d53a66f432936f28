//! Search query types.

/// A query as typed, normalized for matching.
///
/// Surrounding whitespace is dropped; a query that is blank after that is
/// empty and matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    folded: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        let text = text.trim();
        Self {
            text: text.to_string(),
            folded: text.to_lowercase(),
        }
    }

    /// The trimmed query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased query, compared against folded keys.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
