pub(crate) mod entry;
pub use entry::{OverloadRef, SymbolEntry, SymbolId};

pub(crate) mod key;
pub use key::{SymbolKey, SymbolKeyError};

pub(crate) mod url;
pub use url::{TargetUrl, TargetUrlError};
