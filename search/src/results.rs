//! Search results types.

use serde::Serialize;
use symdex_core::types::{OverloadRef, SymbolEntry};

/// Render-ready answer to one query: symbol groups in ranked order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderResult {
    groups: Vec<ResultGroup>,
}

/// One symbol and its overload links, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultGroup {
    pub key: String,
    pub overloads: Vec<ResultLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultLink {
    pub target_url: String,
    pub qualified_label: String,
    pub parent_frame: bool,
}

impl RenderResult {
    pub(crate) fn from_entries<'a>(entries: impl IntoIterator<Item = &'a SymbolEntry>) -> Self {
        Self {
            groups: entries.into_iter().map(ResultGroup::from).collect(),
        }
    }

    pub fn groups(&self) -> &[ResultGroup] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultGroup> + '_ {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys of all groups, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(|g| g.key.as_str())
    }
}

impl<'a> IntoIterator for &'a RenderResult {
    type Item = &'a ResultGroup;
    type IntoIter = std::slice::Iter<'a, ResultGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl From<&SymbolEntry> for ResultGroup {
    fn from(entry: &SymbolEntry) -> Self {
        Self {
            key: entry.key().to_string(),
            overloads: entry.overloads().iter().map(ResultLink::from).collect(),
        }
    }
}

impl From<&OverloadRef> for ResultLink {
    fn from(overload: &OverloadRef) -> Self {
        Self {
            target_url: overload.target_url().to_string(),
            qualified_label: overload.qualified_label().to_string(),
            parent_frame: overload.parent_frame(),
        }
    }
}
