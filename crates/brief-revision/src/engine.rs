//! Revision engine
//!
//! Drives per-section regeneration:
//! - capture the original, regenerate through the generator seam
//! - stage the candidate without touching the live store
//! - accept (write-through), reject (discard), undo-after-confirm
//!
//! Concurrency policy: a second regeneration for a key already in flight
//! is rejected with [`RevisionError::Busy`]. A reject issued while a
//! regeneration is pending bumps the section's epoch; the completion
//! observes the stale epoch and discards its candidate.

use crate::error::RevisionError;
use crate::generate::SectionGenerator;
use crate::state::{validate_transition, RevisionPhase, SectionRevision};
use brief_content::{ContentError, ContentStore, SectionContent, SectionKey};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Result of a regeneration request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerationOutcome {
    /// A candidate was staged
    Staged,
    /// The key held no content; nothing happened
    Skipped,
    /// The section was rejected while the regeneration was pending;
    /// the candidate was discarded
    Cancelled,
}

#[derive(Debug, Default)]
struct EngineState {
    revisions: HashMap<SectionKey, SectionRevision>,
}

/// Per-section regeneration state machine
///
/// Operations take `&self`; interior state sits behind a `parking_lot`
/// lock that is never held across an await. The content store handle is
/// shared with the surrounding session for direct reads.
pub struct RevisionEngine {
    store: Arc<RwLock<ContentStore>>,
    generator: Arc<dyn SectionGenerator>,
    state: RwLock<EngineState>,
}

impl std::fmt::Debug for RevisionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevisionEngine")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl RevisionEngine {
    /// Create a new engine over a shared content store
    #[must_use]
    pub fn new(store: Arc<RwLock<ContentStore>>, generator: Arc<dyn SectionGenerator>) -> Self {
        Self {
            store,
            generator,
            state: RwLock::new(EngineState::default()),
        }
    }

    /// Regenerate a section's content
    ///
    /// Captures the current content as `original`, enters `Regenerating`,
    /// awaits the generator, then stages the candidate. The live store is
    /// not touched until the candidate is accepted.
    ///
    /// # Errors
    /// - [`RevisionError::Busy`] if a regeneration for `key` is in flight
    /// - [`RevisionError::IllegalTransition`] if the section is `Staged`
    ///   or `Confirmed` (resolve or undo first)
    ///
    /// A key holding no content is a no-op ([`RegenerationOutcome::Skipped`]).
    pub async fn regenerate_section(
        &self,
        key: &SectionKey,
        prompt: &str,
    ) -> Result<RegenerationOutcome, RevisionError> {
        // Validate and capture under the lock, before any suspension.
        let (original, epoch) = {
            let current = match self.store.read().get(key) {
                Some(content) if !content.is_empty() => content.clone(),
                _ => {
                    tracing::debug!(key = %key, "regeneration skipped: no content");
                    return Ok(RegenerationOutcome::Skipped);
                }
            };

            let mut state = self.state.write();
            let revision = state.revisions.entry(key.clone()).or_default();
            if revision.phase == RevisionPhase::Regenerating {
                return Err(RevisionError::Busy(key.clone()));
            }
            validate_transition(key, revision.phase, RevisionPhase::Regenerating)?;

            revision.original = Some(current.clone());
            revision.staged = None;
            revision.phase = RevisionPhase::Regenerating;
            let epoch = revision.epoch;

            tracing::info!(key = %key, "regeneration started");
            (current, epoch)
        };

        // The only suspension point: simulated generation latency.
        let candidate = self.generator.generate(key, prompt, &original).await;

        let mut state = self.state.write();
        let Some(revision) = state.revisions.get_mut(key) else {
            return Ok(RegenerationOutcome::Cancelled);
        };
        if revision.epoch != epoch || revision.phase != RevisionPhase::Regenerating {
            tracing::info!(key = %key, "regeneration cancelled before completion");
            return Ok(RegenerationOutcome::Cancelled);
        }

        revision.staged = Some(candidate);
        revision.phase = RevisionPhase::Staged;
        tracing::info!(key = %key, "regeneration staged");
        Ok(RegenerationOutcome::Staged)
    }

    /// Accept the staged candidate, writing it into the live store
    ///
    /// Transitions to `Confirmed`, retaining `original` for undo.
    /// Silent no-op unless the section is `Staged`.
    pub fn accept_regeneration(&self, key: &SectionKey) -> Result<bool, ContentError> {
        let mut state = self.state.write();
        let Some(revision) = state.revisions.get_mut(key) else {
            return Ok(false);
        };
        if revision.phase != RevisionPhase::Staged {
            tracing::debug!(key = %key, phase = ?revision.phase, "accept ignored");
            return Ok(false);
        }
        let Some(candidate) = revision.staged.take() else {
            return Ok(false);
        };

        self.store.write().write(key, candidate)?;
        revision.phase = RevisionPhase::Confirmed;
        tracing::info!(key = %key, "regeneration accepted");
        Ok(true)
    }

    /// Discard the staged or pending candidate and return to `Original`
    ///
    /// The live store is never touched: staging never wrote to it. A
    /// reject during `Regenerating` cancels the pending completion.
    /// Returns whether anything was discarded.
    pub fn reject_regeneration(&self, key: &SectionKey) -> bool {
        let mut state = self.state.write();
        let Some(revision) = state.revisions.get_mut(key) else {
            return false;
        };
        if revision.phase == RevisionPhase::Original {
            return false;
        }

        revision.staged = None;
        revision.original = None;
        revision.epoch += 1;
        revision.phase = RevisionPhase::Original;
        tracing::info!(key = %key, "regeneration rejected");
        true
    }

    /// Undo a confirmed regeneration, restoring the captured original
    ///
    /// Silent no-op unless the section is `Confirmed` with a retained
    /// original.
    pub fn undo_confirmed_regeneration(&self, key: &SectionKey) -> Result<bool, ContentError> {
        let mut state = self.state.write();
        let Some(revision) = state.revisions.get_mut(key) else {
            return Ok(false);
        };
        if revision.phase != RevisionPhase::Confirmed {
            tracing::debug!(key = %key, phase = ?revision.phase, "undo ignored");
            return Ok(false);
        }
        let Some(original) = revision.original.take() else {
            return Ok(false);
        };

        self.store.write().write(key, original)?;
        revision.phase = RevisionPhase::Original;
        tracing::info!(key = %key, "confirmed regeneration undone");
        Ok(true)
    }

    /// Direct-edit path: write content for a plain or channel-qualified key
    ///
    /// Merges into the per-channel map without disturbing sibling
    /// channels. Does not touch revision state; confirmation badges are a
    /// UI concept.
    pub fn update_brief_section(
        &self,
        key: &SectionKey,
        content: SectionContent,
    ) -> Result<(), ContentError> {
        self.store.write().write(key, content)
    }

    /// Current phase for a key (`Original` when never regenerated)
    #[must_use]
    pub fn phase(&self, key: &SectionKey) -> RevisionPhase {
        self.state
            .read()
            .revisions
            .get(key)
            .map(|r| r.phase)
            .unwrap_or_default()
    }

    /// Original content captured at regeneration start, if retained
    #[must_use]
    pub fn original_content(&self, key: &SectionKey) -> Option<SectionContent> {
        self.state
            .read()
            .revisions
            .get(key)
            .and_then(|r| r.original.clone())
    }

    /// Staged candidate, if any
    #[must_use]
    pub fn staged_content(&self, key: &SectionKey) -> Option<SectionContent> {
        self.state
            .read()
            .revisions
            .get(key)
            .and_then(|r| r.staged.clone())
    }

    /// Keys with a regeneration currently in flight
    ///
    /// Callers use this to disable conflicting UI actions.
    #[must_use]
    pub fn in_flight(&self) -> Vec<SectionKey> {
        self.state
            .read()
            .revisions
            .iter()
            .filter(|(_, r)| r.phase == RevisionPhase::Regenerating)
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Whether a regeneration for `key` is in flight
    #[inline]
    #[must_use]
    pub fn is_in_flight(&self, key: &SectionKey) -> bool {
        self.phase(key) == RevisionPhase::Regenerating
    }
}
