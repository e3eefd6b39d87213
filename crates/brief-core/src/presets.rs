//! Preset editors
//!
//! Keyed editable records with snapshot-backed undo:
//! - `begin_edit` captures the record before the user touches it
//! - `update` overwrites the live record
//! - `undo_edits` restores the capture; no-op when none exists
//! - `save` keeps the live record and drops the capture
//!
//! Four record kinds share one generic editor: company guidelines (a
//! singleton), communication personalities, target-audience presets, and
//! product guidelines.

use brief_snapshot::SnapshotStore;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use brief_snapshot::SINGLETON_KEY;

/// Company-wide writing guidelines (singleton record)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyGuidelines {
    pub tone: String,
    pub phrases_to_avoid: Vec<String>,
    pub regulatory_notes: String,
}

/// A reusable communication personality
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personality {
    pub name: String,
    pub description: String,
    pub voice: String,
}

/// A saved target-audience preset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudiencePreset {
    pub name: String,
    pub segment: String,
    pub pain_points: Vec<String>,
}

/// Per-product messaging guidelines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductGuidelines {
    pub product: String,
    pub approved_claims: Vec<String>,
    pub disclaimers: Vec<String>,
}

#[derive(Debug)]
struct EditorState<R> {
    records: HashMap<String, R>,
    snapshots: SnapshotStore<String, R>,
}

impl<R> Default for EditorState<R>
where
    R: Clone + PartialEq,
{
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            snapshots: SnapshotStore::new(),
        }
    }
}

/// Keyed record editor with snapshot-backed undo
///
/// Operations take `&self`; interior state sits behind a `parking_lot`
/// lock. Change detection is structural: `has_changes` compares the live
/// record against the capture by value.
#[derive(Debug)]
pub struct PresetEditor<R> {
    state: RwLock<EditorState<R>>,
}

impl<R> Default for PresetEditor<R>
where
    R: Clone + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PresetEditor<R>
where
    R: Clone + PartialEq,
{
    /// Create an empty editor
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(EditorState::default()),
        }
    }

    /// Insert or overwrite a record outside an edit session
    pub fn insert(&self, key: impl Into<String>, record: R) {
        self.state.write().records.insert(key.into(), record);
    }

    /// Clone of the record under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<R> {
        self.state.read().records.get(key).cloned()
    }

    /// Whether a record exists under `key`
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.state.read().records.contains_key(key)
    }

    /// Capture the record under `key` so later edits can be undone
    ///
    /// Recapturing overwrites the prior capture. Returns `false` (no-op)
    /// when no record exists.
    pub fn begin_edit(&self, key: &str) -> bool {
        let mut state = self.state.write();
        let Some(record) = state.records.get(key).cloned() else {
            return false;
        };
        state.snapshots.capture(key.to_string(), &record);
        true
    }

    /// Overwrite the live record under `key`
    ///
    /// Returns `false` when no record exists; updates never create.
    pub fn update(&self, key: &str, record: R) -> bool {
        let mut state = self.state.write();
        if !state.records.contains_key(key) {
            return false;
        }
        state.records.insert(key.to_string(), record);
        true
    }

    /// Restore the record captured by `begin_edit`
    ///
    /// Consumes the capture. Returns `false` (no-op) when none exists.
    pub fn undo_edits(&self, key: &str) -> bool {
        let mut state = self.state.write();
        let Some(original) = state.snapshots.restore(&key.to_string()) else {
            return false;
        };
        state.records.insert(key.to_string(), original);
        true
    }

    /// Whether the live record differs from its capture
    ///
    /// `false` when no capture exists.
    #[must_use]
    pub fn has_changes(&self, key: &str) -> bool {
        let state = self.state.read();
        match state.records.get(key) {
            Some(live) => state.snapshots.has_changes(&key.to_string(), live),
            None => false,
        }
    }

    /// Keep the live record and drop the capture
    pub fn save(&self, key: &str) {
        self.state.write().snapshots.clear(&key.to_string());
    }

    /// Remove a record and any capture for it
    pub fn remove(&self, key: &str) -> Option<R> {
        let mut state = self.state.write();
        state.snapshots.clear(&key.to_string());
        state.records.remove(key)
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    /// Whether the editor holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn editor_with_personality() -> PresetEditor<Personality> {
        let editor = PresetEditor::new();
        editor.insert(
            "p1",
            Personality {
                name: "The Clinician".into(),
                description: "Evidence-first, no hype".into(),
                voice: "precise".into(),
            },
        );
        editor
    }

    #[test]
    fn edit_then_undo_restores_original() {
        let editor = editor_with_personality();
        let original = editor.get("p1").unwrap();

        assert!(editor.begin_edit("p1"));
        let mut edited = original.clone();
        edited.voice = "breezy".into();
        assert!(editor.update("p1", edited));
        assert!(editor.has_changes("p1"));

        assert!(editor.undo_edits("p1"));
        assert_eq!(editor.get("p1"), Some(original));
        // Capture consumed; nothing left to compare against
        assert!(!editor.has_changes("p1"));
    }

    #[test]
    fn undo_without_capture_is_noop() {
        let editor = editor_with_personality();
        assert!(!editor.undo_edits("p1"));
        assert!(!editor.undo_edits("missing"));
    }

    #[test]
    fn save_keeps_edits_and_drops_capture() {
        let editor = editor_with_personality();
        editor.begin_edit("p1");
        let mut edited = editor.get("p1").unwrap();
        edited.name = "The Advocate".into();
        editor.update("p1", edited.clone());

        editor.save("p1");
        assert_eq!(editor.get("p1"), Some(edited));
        assert!(!editor.undo_edits("p1"));
    }

    #[test]
    fn has_changes_is_structural() {
        let editor = editor_with_personality();
        editor.begin_edit("p1");

        // Rewriting the same value is not a change
        let same = editor.get("p1").unwrap();
        editor.update("p1", same);
        assert!(!editor.has_changes("p1"));
    }

    #[test]
    fn update_never_creates() {
        let editor: PresetEditor<Personality> = PresetEditor::new();
        assert!(!editor.update("ghost", Personality::default()));
        assert!(editor.is_empty());
    }

    #[test]
    fn singleton_guidelines_round_trip() {
        let editor: PresetEditor<CompanyGuidelines> = PresetEditor::new();
        editor.insert(
            SINGLETON_KEY,
            CompanyGuidelines {
                tone: "formal".into(),
                phrases_to_avoid: vec!["best-in-class".into()],
                regulatory_notes: "fair balance required".into(),
            },
        );

        editor.begin_edit(SINGLETON_KEY);
        let mut edited = editor.get(SINGLETON_KEY).unwrap();
        edited.tone = "casual".into();
        editor.update(SINGLETON_KEY, edited);

        editor.undo_edits(SINGLETON_KEY);
        assert_eq!(editor.get(SINGLETON_KEY).unwrap().tone, "formal");
    }
}
