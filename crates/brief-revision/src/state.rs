//! Revision state machine
//!
//! Per section key: `Original -> Regenerating -> Staged -> {Confirmed |
//! Original}`; `Confirmed -> Original` via undo. There is deliberately no
//! `Confirmed -> Regenerating` edge: a confirmed section must be undone
//! before it can be regenerated again.

use crate::error::RevisionError;
use brief_content::{SectionContent, SectionKey};

/// Phase of a section's regeneration lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RevisionPhase {
    /// Live content, no candidate pending
    #[default]
    Original,
    /// A regeneration is in flight
    Regenerating,
    /// A candidate is staged; the live store is untouched
    Staged,
    /// The candidate was accepted and written to the live store
    Confirmed,
}

/// Transitions allowed from a phase
pub fn allowed_transitions(from: RevisionPhase) -> Vec<RevisionPhase> {
    use RevisionPhase::*;
    match from {
        Original => vec![Regenerating],
        Regenerating => vec![Staged, Original],
        Staged => vec![Confirmed, Original],
        Confirmed => vec![Original],
    }
}

/// Validates a phase transition for a section
pub fn validate_transition(
    key: &SectionKey,
    from: RevisionPhase,
    to: RevisionPhase,
) -> Result<(), RevisionError> {
    if allowed(from, to) {
        Ok(())
    } else {
        Err(RevisionError::IllegalTransition {
            key: key.clone(),
            from,
            to,
        })
    }
}

fn allowed(from: RevisionPhase, to: RevisionPhase) -> bool {
    allowed_transitions(from).into_iter().any(|p| p == to)
}

/// Revision state for one section key
///
/// # Invariants
/// - `Regenerating` and `Staged` always carry an `original` captured
///   before any mutation.
/// - In `Staged`, only `staged` holds the candidate; the live store is
///   untouched.
/// - In `Confirmed`, the live store already holds the accepted candidate;
///   `original` is retained solely for undo.
#[derive(Debug, Clone, Default)]
pub struct SectionRevision {
    /// Current phase
    pub phase: RevisionPhase,
    /// Snapshot captured when regeneration started
    pub original: Option<SectionContent>,
    /// Candidate produced by regeneration
    pub staged: Option<SectionContent>,
    /// Cancellation token: a pending completion applies only if the epoch
    /// it captured is still current
    pub epoch: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use RevisionPhase::*;

    #[test]
    fn original_only_regenerates() {
        assert_eq!(allowed_transitions(Original), vec![Regenerating]);
    }

    #[test]
    fn no_confirmed_to_regenerating_edge() {
        assert_eq!(allowed_transitions(Confirmed), vec![Original]);
        let key = SectionKey::bare("objectives");
        assert!(validate_transition(&key, Confirmed, Regenerating).is_err());
    }

    #[test]
    fn staged_resolves_both_ways() {
        let key = SectionKey::bare("objectives");
        assert!(validate_transition(&key, Staged, Confirmed).is_ok());
        assert!(validate_transition(&key, Staged, Original).is_ok());
        assert!(validate_transition(&key, Staged, Regenerating).is_err());
    }

    #[test]
    fn regenerating_resolves_to_staged_or_original() {
        let key = SectionKey::bare("objectives");
        assert!(validate_transition(&key, Regenerating, Staged).is_ok());
        assert!(validate_transition(&key, Regenerating, Original).is_ok());
        assert!(validate_transition(&key, Regenerating, Confirmed).is_err());
    }
}
