//! Engine configuration
//!
//! One serde-friendly record carrying the tunables for a session:
//! simulated latencies and the optional deterministic generator seed.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default simulated regeneration latency, in milliseconds
pub const DEFAULT_REGEN_DELAY_MS: u64 = 1200;
/// Default simulated AI-search latency, in milliseconds
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 1500;

/// Configuration for a [`crate::BriefSession`]
///
/// Delays are carried as milliseconds so the record deserializes from
/// plain JSON. A `generator_seed` makes the mock generator's variation
/// picks reproducible; leave it unset for OS entropy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Simulated regeneration latency in milliseconds
    pub regen_delay_ms: u64,
    /// Simulated AI-search latency in milliseconds
    pub search_delay_ms: u64,
    /// Seed for the mock generator's RNG
    pub generator_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            regen_delay_ms: DEFAULT_REGEN_DELAY_MS,
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            generator_seed: None,
        }
    }
}

impl EngineConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-latency configuration with a fixed seed, for tests and demos
    #[must_use]
    pub fn fast() -> Self {
        Self {
            regen_delay_ms: 0,
            search_delay_ms: 0,
            generator_seed: Some(42),
        }
    }

    /// Override the regeneration latency
    #[inline]
    #[must_use]
    pub fn with_regen_delay(mut self, delay: Duration) -> Self {
        self.regen_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Override the AI-search latency
    #[inline]
    #[must_use]
    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Pin the mock generator's RNG seed
    #[inline]
    #[must_use]
    pub fn with_generator_seed(mut self, seed: u64) -> Self {
        self.generator_seed = Some(seed);
        self
    }

    /// Regeneration latency as a [`Duration`]
    #[inline]
    #[must_use]
    pub fn regen_delay(&self) -> Duration {
        Duration::from_millis(self.regen_delay_ms)
    }

    /// AI-search latency as a [`Duration`]
    #[inline]
    #[must_use]
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_constants() {
        let config = EngineConfig::new();
        assert_eq!(config.regen_delay_ms, DEFAULT_REGEN_DELAY_MS);
        assert_eq!(config.search_delay_ms, DEFAULT_SEARCH_DELAY_MS);
        assert_eq!(config.generator_seed, None);
    }

    #[test]
    fn builder_overrides() {
        let config = EngineConfig::new()
            .with_regen_delay(Duration::from_millis(10))
            .with_search_delay(Duration::ZERO)
            .with_generator_seed(7);
        assert_eq!(config.regen_delay(), Duration::from_millis(10));
        assert_eq!(config.search_delay(), Duration::ZERO);
        assert_eq!(config.generator_seed, Some(7));
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let config: EngineConfig = serde_json::from_str(r#"{"regen_delay_ms": 5}"#).unwrap();
        assert_eq!(config.regen_delay_ms, 5);
        assert_eq!(config.search_delay_ms, DEFAULT_SEARCH_DELAY_MS);
    }
}
