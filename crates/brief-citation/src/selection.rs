//! Citation selection engine
//!
//! Maintains the deduplicated selection set over the citation pool:
//! - idempotent manual toggle
//! - AI-assisted search combining candidates per [`AiSelectionMode`]
//! - pure selectors over the pool
//!
//! Callers always receive owned snapshots of the selection, never
//! references into the live set, so a snapshot held across an operation
//! stays stable for diffing.

use crate::pool::{Citation, CitationId, CitationPool};
use crate::search::{candidate_ids, AiSearchOutcome, AiSelectionMode, SearchContext};
use indexmap::IndexSet;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Default simulated latency for the mock AI search
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Default)]
struct SelectionState {
    selected: IndexSet<CitationId>,
    mode: AiSelectionMode,
}

/// Deduplicated selection set over a citation pool
///
/// Operations take `&self`; interior state sits behind a `parking_lot`
/// lock that is never held across an await.
pub struct SelectionEngine {
    pool: Arc<CitationPool>,
    state: RwLock<SelectionState>,
    search_delay: Duration,
}

impl std::fmt::Debug for SelectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl SelectionEngine {
    /// Create an engine over a shared pool
    #[must_use]
    pub fn new(pool: Arc<CitationPool>) -> Self {
        Self {
            pool,
            state: RwLock::new(SelectionState::default()),
            search_delay: DEFAULT_SEARCH_DELAY,
        }
    }

    /// Override the simulated search latency
    #[inline]
    #[must_use]
    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    /// Toggle a citation in or out of the selection
    ///
    /// Idempotent flip: present → removed, absent → added. Adding an id
    /// the pool does not hold is a silent no-op (stale ids are never
    /// added). Returns the new selection snapshot.
    pub fn toggle(&self, id: &CitationId) -> Vec<CitationId> {
        let mut state = self.state.write();
        if state.selected.shift_remove(id) {
            tracing::debug!(id = %id, "citation deselected");
        } else if self.pool.contains(id) {
            state.selected.insert(id.clone());
            tracing::debug!(id = %id, "citation selected");
        } else {
            tracing::debug!(id = %id, "toggle ignored: id not in pool");
        }
        state.selected.iter().cloned().collect()
    }

    /// Set how the next AI search combines with the selection
    ///
    /// Pure state setter; does not touch the current selection.
    pub fn set_mode(&self, mode: AiSelectionMode) {
        self.state.write().mode = mode;
    }

    /// Mode currently in force
    #[inline]
    #[must_use]
    pub fn mode(&self) -> AiSelectionMode {
        self.state.read().mode
    }

    /// Run the AI-assisted search and apply the result
    ///
    /// Candidates come from the deterministic routing rule; the
    /// combination honors the mode set via [`SelectionEngine::set_mode`]:
    /// merge unions with the existing selection, replace discards it.
    pub async fn search_with_ai(&self, context: &SearchContext) -> AiSearchOutcome {
        let candidates = candidate_ids(context, &self.pool);

        // Simulated latency: the single suspension point.
        tokio::time::sleep(self.search_delay).await;

        let mut state = self.state.write();
        let previous_count = state.selected.len();
        let mode = state.mode;

        match mode {
            AiSelectionMode::Merge => {
                for id in &candidates {
                    state.selected.insert(id.clone());
                }
            }
            AiSelectionMode::Replace => {
                state.selected = candidates.iter().cloned().collect();
            }
        }

        let outcome = AiSearchOutcome {
            previous_count,
            candidate_ids: candidates,
            final_count: state.selected.len(),
            mode,
        };

        tracing::info!(
            previous_count = outcome.previous_count,
            candidates = ?outcome.candidate_ids,
            final_count = outcome.final_count,
            mode = ?outcome.mode,
            "ai citation search applied"
        );

        outcome
    }

    /// Whether `id` is selected
    #[inline]
    #[must_use]
    pub fn is_selected(&self, id: &CitationId) -> bool {
        self.state.read().selected.contains(id)
    }

    /// Number of selected citations
    #[inline]
    #[must_use]
    pub fn selection_count(&self) -> usize {
        self.state.read().selected.len()
    }

    /// Snapshot of the selected ids
    #[must_use]
    pub fn selection(&self) -> Vec<CitationId> {
        self.state.read().selected.iter().cloned().collect()
    }

    /// Selected citations in pool order (not selection-insertion order)
    #[must_use]
    pub fn selected_citations(&self) -> Vec<Citation> {
        let state = self.state.read();
        self.pool
            .iter()
            .filter(|c| state.selected.contains(&c.id))
            .cloned()
            .collect()
    }

    /// Filter the pool by a free-text query
    #[must_use]
    pub fn filtered_citations(&self, query: &str) -> Vec<Citation> {
        self.pool.filter(query).into_iter().cloned().collect()
    }

    /// The pool this engine selects over
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &CitationPool {
        &self.pool
    }
}
