use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Query engine settings, persisted as `search.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of groups returned per query. Unlimited when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_limit: Option<usize>,
    /// Narrow each scan to entries containing the query's first character.
    pub char_postings: bool,
    /// Reuse the previous result when the query text is unchanged.
    pub cache: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: None,
            char_postings: true,
            cache: true,
        }
    }
}

#[derive(Error, Debug)]
pub enum SearchConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl SearchConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("search.toml")
    }

    /// Loads config from a TOML file. Returns default config if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, SearchConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        if let Some(problem) = config.validate().into_iter().next() {
            return Err(SearchConfigError::Invalid(problem));
        }
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), SearchConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns every problem found; empty when the config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.result_limit == Some(0) {
            errors.push("result_limit must be at least 1".to_string());
        }

        errors
    }
}
