//! Brief Citation - citation pool and selection engine
//!
//! Maintains a deduplicated selection set over a candidate citation pool:
//! - [`CitationPool`] with a case-insensitive free-text filter
//! - [`SelectionEngine`] with idempotent toggle and AI-assisted search
//! - deterministic routing/ranking in [`search`] (fixed topic lists,
//!   `(relevance desc, year desc, title asc)` tie-break)

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod pool;
pub mod search;
pub mod selection;

// Re-exports for convenience
pub use pool::{Citation, CitationId, CitationPool};
pub use search::{
    candidate_ids, ranked_top, AiSearchOutcome, AiSelectionMode, SearchContext,
    IMMUNOTHERAPY_CITATIONS, LOKELMA_CITATIONS, RANKED_CANDIDATE_COUNT,
};
pub use selection::{SelectionEngine, DEFAULT_SEARCH_DELAY};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
