//! Generation artifact readers.
//!
//! An artifact is read into a [`RawIndex`] first. Nothing here validates the
//! data model; that happens in [`IndexStore::load`](crate::index::IndexStore::load)
//! so a bad artifact is rejected as a whole.

mod doxygen;

use crate::error::IndexError;
use serde::{Deserialize, Serialize};

/// Unvalidated contents of one or more generation artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawIndex {
    records: Vec<RawRecord>,
}

/// One symbol as the generator emitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordRepr")]
pub struct RawRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub key: String,
    pub overloads: Vec<RawOverload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OverloadRepr")]
pub struct RawOverload {
    pub target_url: String,
    pub qualified_label: String,
    pub parent_frame: bool,
}

impl RawIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON array of records.
    ///
    /// Records are objects (`{"id"?, "key", "overloads": [...]}`) or
    /// `[key, [[url, label], ...]]` tuples; both forms may be mixed.
    pub fn from_json(src: &str) -> Result<Self, IndexError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Reads a Doxygen `search/*.js` file (`var searchData=[...];`).
    pub fn from_doxygen(src: &str) -> Result<Self, IndexError> {
        doxygen::parse(src)
    }

    pub fn push(&mut self, record: RawRecord) {
        self.records.push(record);
    }

    /// Appends the records of another artifact after this one's.
    pub fn append(&mut self, mut other: RawIndex) {
        self.records.append(&mut other.records);
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn into_records(self) -> Vec<RawRecord> {
        self.records
    }
}

impl FromIterator<RawRecord> for RawIndex {
    fn from_iter<I: IntoIterator<Item = RawRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl RawRecord {
    pub fn new(key: impl Into<String>, overloads: Vec<RawOverload>) -> Self {
        Self {
            id: None,
            key: key.into(),
            overloads,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

impl RawOverload {
    pub fn new(target_url: impl Into<String>, qualified_label: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            qualified_label: qualified_label.into(),
            parent_frame: false,
        }
    }

    pub fn in_parent_frame(mut self) -> Self {
        self.parent_frame = true;
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordRepr {
    Object {
        #[serde(default)]
        id: Option<u64>,
        key: String,
        overloads: Vec<RawOverload>,
    },
    Tuple(String, Vec<RawOverload>),
}

impl From<RecordRepr> for RawRecord {
    fn from(repr: RecordRepr) -> Self {
        match repr {
            RecordRepr::Object { id, key, overloads } => Self { id, key, overloads },
            RecordRepr::Tuple(key, overloads) => Self {
                id: None,
                key,
                overloads,
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OverloadRepr {
    Object {
        #[serde(alias = "url")]
        target_url: String,
        #[serde(default, alias = "label")]
        qualified_label: String,
        #[serde(default)]
        parent_frame: bool,
    },
    Pair(String, String),
}

impl From<OverloadRepr> for RawOverload {
    fn from(repr: OverloadRepr) -> Self {
        match repr {
            OverloadRepr::Object {
                target_url,
                qualified_label,
                parent_frame,
            } => Self {
                target_url,
                qualified_label,
                parent_frame,
            },
            OverloadRepr::Pair(target_url, qualified_label) => Self {
                target_url,
                qualified_label,
                parent_frame: false,
            },
        }
    }
}
