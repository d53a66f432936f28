//! Result ordering.

use crate::query::SearchQuery;
use std::cmp::Ordering;
use symdex_core::types::SymbolEntry;

/// How a key matched the query, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Key equals the query, ignoring case.
    Exact,
    /// Key starts with the query.
    Prefix,
    /// Query occurs later in the key.
    Substring,
}

impl MatchTier {
    pub fn of(entry: &SymbolEntry, query: &SearchQuery) -> Self {
        let key = entry.folded_key();
        let query = query.folded();
        if key == query {
            MatchTier::Exact
        } else if key.starts_with(query) {
            MatchTier::Prefix
        } else {
            MatchTier::Substring
        }
    }
}

/// Orders matched entries by tier, then folded key, then id.
///
/// Ids are unique within an index, so no two entries ever compare equal and
/// the same query over the same index always yields the same order.
/// Overloads inside an entry are left exactly as generated.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingPolicy;

impl RankingPolicy {
    pub fn rank<'a>(mut matched: Vec<&'a SymbolEntry>, query: &SearchQuery) -> Vec<&'a SymbolEntry> {
        matched.sort_by_key(|&entry| (MatchTier::of(entry, query), entry.folded_key(), entry.id()));
        matched
    }

    pub fn compare(a: &SymbolEntry, b: &SymbolEntry, query: &SearchQuery) -> Ordering {
        MatchTier::of(a, query)
            .cmp(&MatchTier::of(b, query))
            .then_with(|| a.folded_key().cmp(b.folded_key()))
            .then_with(|| a.id().cmp(&b.id()))
    }
}
