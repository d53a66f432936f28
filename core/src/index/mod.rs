//! Immutable in-memory symbol index.
//!
//! Design:
//! - Entries live in one flat `Vec` in generation order.
//! - Acceleration structures hold positions into that `Vec`:
//!   - `by_first_char`: entries bucketed by the first character of the folded key
//!   - `postings`: entries bucketed by every distinct character of the folded key
//! - A store is built in one go by [`IndexStore::load`] and never mutated.
//!   Replacing an index means building a new store.

use crate::artifact::RawIndex;
use crate::error::IndexError;
use crate::types::{OverloadRef, SymbolEntry, SymbolId, SymbolKey, TargetUrl};
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IndexStore {
    entries: Vec<SymbolEntry>,
    by_id: HashMap<SymbolId, usize>,
    by_first_char: HashMap<char, Vec<usize>>,
    postings: HashMap<char, Vec<usize>>,
}

/// Create operations.
impl IndexStore {
    /// An index with no entries. Every query against it comes back empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validates a raw artifact and builds the index from it.
    ///
    /// Keys and target urls are trimmed of surrounding whitespace; a key or
    /// url that is blank after trimming is rejected. Labels are kept as emitted.
    /// Records without an id are given their position in the artifact.
    /// Records repeating an earlier key are folded into that key's entry,
    /// with their overloads appended in artifact order.
    ///
    /// Fails on the first record that breaks the data model; nothing is
    /// built in that case.
    pub fn load(raw: RawIndex) -> Result<Self, IndexError> {
        let mut entries: Vec<SymbolEntry> = Vec::with_capacity(raw.len());
        let mut by_id = HashMap::with_capacity(raw.len());
        let mut by_key: HashMap<SymbolKey, usize> = HashMap::with_capacity(raw.len());
        let mut merged = 0usize;

        for (position, record) in raw.into_records().into_iter().enumerate() {
            let id = SymbolId::new(record.id.unwrap_or(position as u64));
            let key = SymbolKey::try_new(record.key).map_err(|source| IndexError::InvalidKey {
                record: position,
                source,
            })?;

            if record.overloads.is_empty() {
                return Err(IndexError::NoOverloads {
                    key: key.into_inner(),
                });
            }

            let mut overloads = Vec::with_capacity(record.overloads.len());
            for (i, overload) in record.overloads.into_iter().enumerate() {
                let target_url = TargetUrl::try_new(overload.target_url).map_err(|_| {
                    IndexError::EmptyTargetUrl {
                        key: key.to_string(),
                        overload: i,
                    }
                })?;
                overloads.push(OverloadRef::new(
                    target_url,
                    overload.qualified_label,
                    overload.parent_frame,
                ));
            }

            let slot = match by_key.get(&key).copied() {
                Some(existing) => {
                    entries[existing].push_overloads(overloads);
                    merged += 1;
                    existing
                }
                None => {
                    let slot = entries.len();
                    by_key.insert(key.clone(), slot);
                    entries.push(SymbolEntry::new(id, key, overloads));
                    slot
                }
            };

            if by_id.insert(id, slot).is_some() {
                return Err(IndexError::DuplicateId { id });
            }
        }

        let mut by_first_char: HashMap<char, Vec<usize>> = HashMap::new();
        let mut postings: HashMap<char, Vec<usize>> = HashMap::new();
        for (slot, entry) in entries.iter().enumerate() {
            let folded = entry.folded_key();
            if let Some(first) = folded.chars().next() {
                by_first_char.entry(first).or_default().push(slot);
            }
            let distinct: HashSet<char> = folded.chars().collect();
            for c in distinct {
                postings.entry(c).or_default().push(slot);
            }
        }

        let store = Self {
            entries,
            by_id,
            by_first_char,
            postings,
        };

        debug!(
            entries = store.entries.len(),
            overloads = store.overload_count(),
            merged,
            "loaded symbol index"
        );

        Ok(store)
    }

    pub fn from_json(src: &str) -> Result<Self, IndexError> {
        Self::load(RawIndex::from_json(src)?)
    }

    pub fn from_doxygen(src: &str) -> Result<Self, IndexError> {
        Self::load(RawIndex::from_doxygen(src)?)
    }
}

/// Read operations.
impl IndexStore {
    /// All entries in generation order.
    pub fn all_entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    /// Entries whose key starts with `c`, ignoring case, in generation order.
    pub fn entries_by_first_char(&self, c: char) -> impl Iterator<Item = &SymbolEntry> + '_ {
        self.bucket(&self.by_first_char, c)
    }

    /// Entries whose key contains `c` anywhere, ignoring case, in generation order.
    ///
    /// Every entry whose key contains a query also contains that query's
    /// first character, so this is a superset of the matches for any query
    /// starting with `c`.
    pub fn entries_containing_char(&self, c: char) -> impl Iterator<Item = &SymbolEntry> + '_ {
        self.bucket(&self.postings, c)
    }

    pub fn get(&self, id: SymbolId) -> Option<&SymbolEntry> {
        self.by_id.get(&id).map(|&slot| &self.entries[slot])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn overload_count(&self) -> usize {
        self.entries.iter().map(|e| e.overloads().len()).sum()
    }

    fn bucket<'a>(
        &'a self,
        buckets: &'a HashMap<char, Vec<usize>>,
        c: char,
    ) -> impl Iterator<Item = &'a SymbolEntry> + 'a {
        let folded = c.to_lowercase().next().unwrap_or(c);
        buckets
            .get(&folded)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&slot| &self.entries[slot])
    }
}

#[cfg(test)]
mod tests;
