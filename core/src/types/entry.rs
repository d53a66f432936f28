use super::{SymbolKey, TargetUrl};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Generation-time identifier of a symbol. Only used to break ordering ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(u64);

impl SymbolId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One documented declaration among the overloads of a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverloadRef {
    target_url: TargetUrl,
    qualified_label: String,
    parent_frame: bool,
}

impl OverloadRef {
    pub fn new(target_url: TargetUrl, qualified_label: String, parent_frame: bool) -> Self {
        Self {
            target_url,
            qualified_label,
            parent_frame,
        }
    }

    pub fn target_url(&self) -> &TargetUrl {
        &self.target_url
    }

    /// Signature or scope that tells this overload apart from its siblings.
    pub fn qualified_label(&self) -> &str {
        &self.qualified_label
    }

    /// Whether the generator asked for the link to open in the parent frame.
    pub fn parent_frame(&self) -> bool {
        self.parent_frame
    }
}

/// A searchable symbol and all of its overloads, in generation order.
///
/// Only [`IndexStore`](crate::index::IndexStore) builds these, after the
/// artifact has been validated, so `overloads` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    id: SymbolId,
    key: SymbolKey,
    folded_key: String,
    overloads: Vec<OverloadRef>,
}

impl SymbolEntry {
    pub(crate) fn new(id: SymbolId, key: SymbolKey, overloads: Vec<OverloadRef>) -> Self {
        debug_assert!(!overloads.is_empty());
        let folded_key = key.folded();
        Self {
            id,
            key,
            folded_key,
            overloads,
        }
    }

    pub fn id(&self) -> SymbolId {
        self.id
    }

    pub fn key(&self) -> &SymbolKey {
        &self.key
    }

    /// Lowercased key, computed once at load.
    pub fn folded_key(&self) -> &str {
        &self.folded_key
    }

    pub fn overloads(&self) -> &[OverloadRef] {
        &self.overloads
    }

    pub(crate) fn push_overloads(&mut self, more: impl IntoIterator<Item = OverloadRef>) {
        self.overloads.extend(more);
    }
}
