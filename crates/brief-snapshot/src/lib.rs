//! Brief Snapshot - keyed snapshot/undo utility
//!
//! Supports "undo my in-progress edits" for any editable record:
//! - capture a deep copy at edit-start
//! - restore it on undo
//! - compare live record to snapshot with structural equality
//! - clear on save
//!
//! Used by the preset editors directly and by the revision engine
//! conceptually (per-section original-content capture follows the same
//! capture/restore/clear lifecycle).

#![warn(unreachable_pub)]
#![allow(missing_docs)]

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Key for a singleton (company-wide) record
pub const SINGLETON_KEY: &str = "singleton";

/// Keyed store of captured record snapshots
///
/// # Invariants
/// - A snapshot, once captured, is never implicitly cleared; only
///   [`SnapshotStore::clear`] removes it, and a new capture for the same
///   key overwrites it.
/// - Change detection uses structural equality, not object identity.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore<K, V> {
    snapshots: HashMap<K, V>,
}

impl<K, V> SnapshotStore<K, V>
where
    K: Eq + Hash + Debug,
    V: Clone + PartialEq,
{
    /// Create an empty snapshot store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: HashMap::new(),
        }
    }

    /// Capture a snapshot of `value` under `key`
    ///
    /// Overwrites any prior snapshot for the same key.
    pub fn capture(&mut self, key: K, value: &V) {
        tracing::debug!(key = ?key, "snapshot captured");
        self.snapshots.insert(key, value.clone());
    }

    /// Take the snapshot for `key`, removing it
    ///
    /// The caller overwrites the live record with the returned value.
    /// Returns `None` (no-op) when no snapshot exists.
    pub fn restore(&mut self, key: &K) -> Option<V> {
        let value = self.snapshots.remove(key);
        if value.is_some() {
            tracing::debug!(key = ?key, "snapshot restored");
        }
        value
    }

    /// Peek at the snapshot for `key` without removing it
    #[inline]
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.snapshots.get(key)
    }

    /// Whether a snapshot exists for `key`
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.snapshots.contains_key(key)
    }

    /// Compare the live record against the snapshot for `key`
    ///
    /// Structural equality: "did the user's edits differ from the
    /// snapshot". Returns `false` when no snapshot exists.
    #[must_use]
    pub fn has_changes(&self, key: &K, live: &V) -> bool {
        match self.snapshots.get(key) {
            Some(snapshot) => snapshot != live,
            None => false,
        }
    }

    /// Remove the snapshot for `key`, normally after a successful save
    pub fn clear(&mut self, key: &K) {
        if self.snapshots.remove(key).is_some() {
            tracing::debug!(key = ?key, "snapshot cleared");
        }
    }

    /// Number of live snapshots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the store holds no snapshots
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Preset {
        name: String,
        tone: String,
    }

    fn preset(name: &str, tone: &str) -> Preset {
        Preset {
            name: name.to_string(),
            tone: tone.to_string(),
        }
    }

    #[test]
    fn capture_and_restore() {
        let mut store = SnapshotStore::new();
        let mut live = preset("Oncology", "clinical");

        store.capture("p1", &live);
        live.tone = "casual".to_string();

        let restored = store.restore(&"p1").unwrap();
        assert_eq!(restored, preset("Oncology", "clinical"));
        // Restore consumes the snapshot
        assert!(!store.contains(&"p1"));
    }

    #[test]
    fn restore_without_snapshot_is_noop() {
        let mut store: SnapshotStore<&str, Preset> = SnapshotStore::new();
        assert_eq!(store.restore(&"missing"), None);
    }

    #[test]
    fn has_changes_uses_structural_equality() {
        let mut store = SnapshotStore::new();
        let live = preset("Cardio", "warm");
        store.capture("p1", &live);

        // A clone is a different allocation but an equal value
        let same_value = live.clone();
        assert!(!store.has_changes(&"p1", &same_value));

        let edited = preset("Cardio", "direct");
        assert!(store.has_changes(&"p1", &edited));
    }

    #[test]
    fn has_changes_without_snapshot_is_false() {
        let store: SnapshotStore<&str, Preset> = SnapshotStore::new();
        assert!(!store.has_changes(&"p1", &preset("x", "y")));
    }

    #[test]
    fn recapture_overwrites() {
        let mut store = SnapshotStore::new();
        store.capture("p1", &preset("A", "one"));
        store.capture("p1", &preset("A", "two"));

        assert_eq!(store.get(&"p1"), Some(&preset("A", "two")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_removes_snapshot() {
        let mut store = SnapshotStore::new();
        store.capture("p1", &preset("A", "one"));
        store.clear(&"p1");
        assert!(store.is_empty());
        // Clearing again is a no-op
        store.clear(&"p1");
    }

    #[test]
    fn singleton_key_usage() {
        let mut store = SnapshotStore::new();
        store.capture(SINGLETON_KEY, &preset("Company", "formal"));
        assert!(store.contains(&SINGLETON_KEY));
    }
}
