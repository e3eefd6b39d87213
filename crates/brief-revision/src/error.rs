//! Error types for the revision engine

use crate::state::RevisionPhase;
use brief_content::{ContentError, SectionKey};

/// Revision engine errors
///
/// Invalid targets (unknown keys, wrong phase for accept/reject/undo) are
/// handled as silent no-ops, not errors; these variants cover the reported
/// conditions the caller is expected to surface.
#[derive(Debug, thiserror::Error)]
pub enum RevisionError {
    /// A regeneration for the same key is already in flight
    #[error("regeneration already in flight for section '{0}'")]
    Busy(SectionKey),

    /// Regeneration requested from a phase with no such transition
    #[error("illegal revision transition for '{key}': {from:?} -> {to:?}")]
    IllegalTransition {
        /// Offending key
        key: SectionKey,
        /// Current phase
        from: RevisionPhase,
        /// Requested phase
        to: RevisionPhase,
    },

    /// Content store rejected a write
    #[error("content error: {0}")]
    Content(#[from] ContentError),
}

impl RevisionError {
    /// Check if the error is the transient busy condition
    #[inline]
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_display_names_the_key() {
        let err = RevisionError::Busy(SectionKey::channeled("tone_of_voice", "email"));
        assert!(err.to_string().contains("tone_of_voice.email"));
        assert!(err.is_busy());
    }

    #[test]
    fn illegal_transition_is_not_busy() {
        let err = RevisionError::IllegalTransition {
            key: SectionKey::bare("objectives"),
            from: RevisionPhase::Confirmed,
            to: RevisionPhase::Regenerating,
        };
        assert!(!err.is_busy());
    }
}
