//! Brief Core - session wiring for the briefcraft workspace
//!
//! Composes the engines into one caller-facing surface:
//! - [`BriefSession`] owning the content store, revision engine,
//!   citation selection engine, and preset editors
//! - [`EngineConfig`] carrying the simulated latencies and seed
//! - [`PresetEditor`] with snapshot-backed undo for keyed records
//! - demo fixtures shared by the binary and the integration suites

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod demo;
pub mod presets;
pub mod session;

// Re-export main types
pub use config::{EngineConfig, DEFAULT_REGEN_DELAY_MS, DEFAULT_SEARCH_DELAY_MS};
pub use presets::{
    AudiencePreset, CompanyGuidelines, Personality, PresetEditor, ProductGuidelines, SINGLETON_KEY,
};
pub use session::BriefSession;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
