//! Brief Revision - per-section regeneration state machine
//!
//! Governs how generated brief content transitions between original,
//! regenerating, staged, and confirmed states:
//! - [`RevisionEngine`] drives regeneration, staging, accept/reject, and
//!   undo-after-confirm
//! - [`SectionGenerator`] is the seam where a real generation service
//!   would be substituted; [`MockGenerator`] simulates it
//! - [`state`] holds the transition table
//!
//! Staging never touches the live content store; only accept writes
//! through.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod engine;
pub mod error;
pub mod generate;
pub mod state;

// Re-exports for convenience
pub use engine::{RegenerationOutcome, RevisionEngine};
pub use error::RevisionError;
pub use generate::{MockGenerator, SectionGenerator, DEFAULT_REGEN_DELAY};
pub use state::{allowed_transitions, validate_transition, RevisionPhase, SectionRevision};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
