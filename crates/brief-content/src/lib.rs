//! Brief Content - section keys and the canonical content store
//!
//! The leaf crate of the workspace:
//! - [`SectionKey`] addresses a section, optionally qualified by channel
//! - [`SectionContent`] is the tagged union of text and key-message lists
//! - [`ContentStore`] holds the live content for the active brief
//!
//! Content moves through the revision state machine natively; there is no
//! serialize/parse round-trip between capture and accept.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod content;
pub mod key;
pub mod store;

// Re-exports for convenience
pub use content::{ContentKind, KeyMessage, KeyMessageId, SectionContent};
pub use key::{SectionKey, SectionKeyError};
pub use store::{ContentError, ContentStore, Section};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
