//! Symbol index for the client-side search of a generated API reference.
//!
//! A generation artifact (JSON records or a Doxygen `searchData` file) is read
//! into a [`RawIndex`], validated and frozen into an [`IndexStore`]. Stores are
//! immutable; a new artifact means a new store.

pub mod artifact;
pub mod error;
pub mod index;
pub mod types;

pub use artifact::{RawIndex, RawOverload, RawRecord};
pub use error::{Error, IndexError, Result};
pub use index::IndexStore;
