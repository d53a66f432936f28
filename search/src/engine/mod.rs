mod matcher;
mod ranking;

use crate::config::SearchConfig;
use crate::query::SearchQuery;
use crate::results::RenderResult;
use std::sync::Arc;
use symdex_core::{IndexError, IndexStore, RawIndex};
use tracing::{debug, trace, warn};

pub use matcher::MatchEngine;
pub use ranking::{MatchTier, RankingPolicy};

/// The object a search box talks to, one call per keystroke.
///
/// Holds the active index, and the last query with its result. Querying
/// never fails; a bad artifact is rejected by `reload` and leaves the
/// active index in place.
pub struct QueryFacade {
    index: Arc<IndexStore>,
    config: SearchConfig,
    matcher: MatchEngine,
    last: Option<LastQuery>,
}

#[derive(Default)]
struct LastQuery {
    text: String,
    result: RenderResult,
}

impl QueryFacade {
    /// Creates a facade over an index that may be shared with other facades.
    pub fn new(index: Arc<IndexStore>, config: SearchConfig) -> Self {
        Self {
            index,
            matcher: MatchEngine::new(config.char_postings),
            config,
            last: None,
        }
    }

    /// Creates a facade with an empty index, for use before the first artifact arrives.
    pub fn empty(config: SearchConfig) -> Self {
        Self::new(Arc::new(IndexStore::empty()), config)
    }

    pub fn index(&self) -> &Arc<IndexStore> {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Search operations.
impl QueryFacade {
    /// Returns the ranked groups matching `text`.
    ///
    /// Surrounding whitespace is ignored. Asking again for the same trimmed
    /// text returns the previous result without scanning the index.
    pub fn query(&mut self, text: &str) -> &RenderResult {
        let query = SearchQuery::new(text);

        let hit = self.config.cache
            && self
                .last
                .as_ref()
                .is_some_and(|last| last.text == query.text());

        if hit {
            trace!(query = query.text(), "query served from cache");
        } else {
            let result = self.run(&query);
            trace!(query = query.text(), groups = result.len(), "query");
            self.last = Some(LastQuery {
                text: query.text().to_string(),
                result,
            });
        }

        &self.last.get_or_insert_with(LastQuery::default).result
    }

    /// The trimmed text of the most recent query, if any.
    pub fn last_query(&self) -> Option<&str> {
        self.last.as_ref().map(|last| last.text.as_str())
    }

    fn run(&self, query: &SearchQuery) -> RenderResult {
        if query.is_empty() {
            return RenderResult::default();
        }

        let matched = self.matcher.matches(&self.index, query);
        let ranked = RankingPolicy::rank(matched, query);
        let limit = self.config.result_limit.unwrap_or(usize::MAX);

        RenderResult::from_entries(ranked.into_iter().take(limit))
    }
}

/// Reload operations.
impl QueryFacade {
    /// Replaces the active index with one built from `raw`.
    ///
    /// On error the previous index and cached result stay active.
    pub fn reload(&mut self, raw: RawIndex) -> Result<(), IndexError> {
        self.replace(IndexStore::load(raw))
    }

    pub fn reload_json(&mut self, src: &str) -> Result<(), IndexError> {
        self.replace(IndexStore::from_json(src))
    }

    pub fn reload_doxygen(&mut self, src: &str) -> Result<(), IndexError> {
        self.replace(IndexStore::from_doxygen(src))
    }

    /// Switches to an already built index, possibly shared with other facades.
    pub fn set_index(&mut self, index: Arc<IndexStore>) {
        self.index = index;
        self.last = None;
    }

    fn replace(&mut self, loaded: Result<IndexStore, IndexError>) -> Result<(), IndexError> {
        match loaded {
            Ok(store) => {
                debug!(entries = store.len(), "search index reloaded");
                self.set_index(Arc::new(store));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, entries = self.index.len(), "rejected index reload, keeping previous index");
                Err(err)
            }
        }
    }
}
