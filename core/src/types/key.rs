use nutype::nutype;

/// Searchable display name of a symbol, such as `index` or `is_valid`.
///
/// Surrounding whitespace is trimmed; any non-blank length is accepted.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct SymbolKey(String);

impl SymbolKey {
    /// Lowercased form used for matching and ordering.
    pub fn folded(&self) -> String {
        self.as_str().to_lowercase()
    }
}
