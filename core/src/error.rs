use crate::types::{SymbolId, SymbolKeyError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed index: {0}")]
    Index(#[from] IndexError),
}

/// A generation artifact violated the data model.
///
/// Raised only while loading. The store being replaced (if any) is never
/// touched when one of these comes back.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },

    #[error("record {record}: invalid key: {source}")]
    InvalidKey {
        record: usize,
        #[source]
        source: SymbolKeyError,
    },

    #[error("symbol {key:?} has no overloads")]
    NoOverloads { key: String },

    #[error("symbol {key:?}: overload {overload} has an empty target url")]
    EmptyTargetUrl { key: String, overload: usize },

    #[error("duplicate symbol id: {id}")]
    DuplicateId { id: SymbolId },
}
