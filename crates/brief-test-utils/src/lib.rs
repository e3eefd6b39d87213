//! Testing utilities for the briefcraft workspace
//!
//! Thin layer over the demo fixtures in `brief-core`: zero-latency,
//! fixed-seed constructors for tests that drive the engines directly.

#![allow(missing_docs)]

use brief_content::ContentStore;
use brief_core::{BriefSession, EngineConfig};
use brief_revision::{MockGenerator, RevisionEngine};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

pub use brief_core::demo::{demo_citation_pool, demo_content_store, demo_session};

/// Shared handle over the demo content store
pub fn demo_store_handle() -> Arc<RwLock<ContentStore>> {
    Arc::new(RwLock::new(demo_content_store()))
}

/// Revision engine over the demo store, with zero latency and a fixed seed
pub fn fast_revision_engine(store: Arc<RwLock<ContentStore>>) -> RevisionEngine {
    let generator = Arc::new(MockGenerator::new().with_delay(Duration::ZERO).with_seed(42));
    RevisionEngine::new(store, generator)
}

/// Fully wired session over the demo fixtures, zero latency, fixed seed
pub fn fast_session() -> BriefSession {
    demo_session(EngineConfig::fast())
}
