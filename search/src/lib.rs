//! Symbol search over an [`IndexStore`](symdex_core::IndexStore).
//!
//! # Design
//!
//! - [`MatchEngine`] keeps the entries whose key contains the query, ignoring case.
//! - [`RankingPolicy`] orders them: exact key, then prefix, then the rest,
//!   ties broken by folded key and finally by symbol id.
//! - [`QueryFacade`] is what the search box calls on each keystroke. It
//!   trims the input, runs the two steps above and packages the result as
//!   a [`RenderResult`]. The last result is kept and returned as-is when the
//!   same text is asked for again.
//!
//! Everything runs synchronously on the caller's thread. The index is
//! immutable and shared behind an `Arc`; reloading swaps in a new one.

mod config;
mod engine;
mod query;
mod results;

pub use config::{SearchConfig, SearchConfigError};
pub use engine::{MatchEngine, MatchTier, QueryFacade, RankingPolicy};
pub use query::SearchQuery;
pub use results::{RenderResult, ResultGroup, ResultLink};
