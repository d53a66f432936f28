use nutype::nutype;

/// Opaque locator of one documented declaration: `page[#anchor]`.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
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
pub struct TargetUrl(String);

impl TargetUrl {
    /// The page part, everything before the first `#`.
    pub fn page(&self) -> &str {
        match self.as_str().split_once('#') {
            Some((page, _)) => page,
            None => self.as_str(),
        }
    }

    /// The in-page anchor, if one is present and non-empty.
    pub fn anchor(&self) -> Option<&str> {
        self.as_str()
            .split_once('#')
            .map(|(_, anchor)| anchor)
            .filter(|anchor| !anchor.is_empty())
    }
}
