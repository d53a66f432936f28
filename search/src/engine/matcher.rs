//! Substring filter over index entries.

use crate::query::SearchQuery;
use symdex_core::IndexStore;
use symdex_core::types::SymbolEntry;

/// Case-insensitive substring filter.
///
/// Exact, prefix and mid-string hits are all just hits here; telling them
/// apart is [`RankingPolicy`](super::RankingPolicy)'s job.
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine {
    char_postings: bool,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MatchEngine {
    /// With `char_postings`, scans only the entries containing the query's
    /// first character instead of the whole store.
    pub fn new(char_postings: bool) -> Self {
        Self { char_postings }
    }

    /// Returns true if the entry's key contains the query, ignoring case.
    ///
    /// An empty query matches nothing.
    pub fn is_match(entry: &SymbolEntry, query: &SearchQuery) -> bool {
        !query.is_empty() && entry.folded_key().contains(query.folded())
    }

    /// Keeps the entries that match `query`, in their original order.
    pub fn filter<'a>(
        entries: impl IntoIterator<Item = &'a SymbolEntry>,
        query: &SearchQuery,
    ) -> Vec<&'a SymbolEntry> {
        if query.is_empty() {
            return Vec::new();
        }
        entries
            .into_iter()
            .filter(|entry| Self::is_match(entry, query))
            .collect()
    }

    /// Matching entries of `store`, in generation order.
    pub fn matches<'a>(&self, store: &'a IndexStore, query: &SearchQuery) -> Vec<&'a SymbolEntry> {
        match query.folded().chars().next() {
            None => Vec::new(),
            Some(first) if self.char_postings => {
                Self::filter(store.entries_containing_char(first), query)
            }
            Some(_) => Self::filter(store.all_entries(), query),
        }
    }
}
