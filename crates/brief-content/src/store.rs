//! Canonical content store for the active brief
//!
//! Holds the live generated content, keyed by section name and optionally
//! qualified by distribution channel. Writes to a channel merge into the
//! per-channel map without disturbing sibling channels.

use crate::content::{ContentKind, SectionContent};
use crate::key::SectionKey;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Content store errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ContentError {
    /// A write would change a section's fixed content shape
    #[error("shape mismatch for section '{key}': section holds {expected:?}, write is {actual:?}")]
    ShapeMismatch {
        /// Offending key
        key: SectionKey,
        /// Shape fixed by the base key
        expected: ContentKind,
        /// Shape of the rejected write
        actual: ContentKind,
    },
}

/// One base section: its fixed shape plus per-channel variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    kind: ContentKind,
    base_content: Option<SectionContent>,
    channels: IndexMap<String, SectionContent>,
}

impl Section {
    fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            base_content: None,
            channels: IndexMap::new(),
        }
    }

    /// Content shape fixed for this base key
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Channel-independent content, if any
    #[inline]
    #[must_use]
    pub fn base_content(&self) -> Option<&SectionContent> {
        self.base_content.as_ref()
    }

    /// Per-channel variants
    #[inline]
    #[must_use]
    pub fn channels(&self) -> &IndexMap<String, SectionContent> {
        &self.channels
    }
}

/// The canonical generated content for the active brief
///
/// All state is in-memory and resets with the process; persistence is a
/// deliberate non-goal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentStore {
    sections: HashMap<String, Section>,
}

impl ContentStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up content for a key
    #[must_use]
    pub fn get(&self, key: &SectionKey) -> Option<&SectionContent> {
        let section = self.sections.get(key.base())?;
        match key.channel() {
            Some(channel) => section.channels.get(channel),
            None => section.base_content.as_ref(),
        }
    }

    /// Check whether a key currently holds content
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &SectionKey) -> bool {
        self.get(key).is_some()
    }

    /// Look up a whole base section
    #[inline]
    #[must_use]
    pub fn section(&self, base: &str) -> Option<&Section> {
        self.sections.get(base)
    }

    /// Write content for a key
    ///
    /// Creates the base section on first write; the first write fixes the
    /// section's content shape. A channel write merges into the per-channel
    /// map and leaves sibling channels untouched.
    ///
    /// # Errors
    /// - `ContentError::ShapeMismatch` if the write would change the
    ///   section's fixed shape
    pub fn write(&mut self, key: &SectionKey, content: SectionContent) -> Result<(), ContentError> {
        let section = self
            .sections
            .entry(key.base().to_string())
            .or_insert_with(|| Section::new(content.kind()));

        if section.kind != content.kind() {
            return Err(ContentError::ShapeMismatch {
                key: key.clone(),
                expected: section.kind,
                actual: content.kind(),
            });
        }

        tracing::debug!(key = %key, kind = ?content.kind(), "content store write");

        match key.channel() {
            Some(channel) => {
                section.channels.insert(channel.to_string(), content);
            }
            None => {
                section.base_content = Some(content);
            }
        }

        Ok(())
    }

    /// Remove content for a key, returning the removed value
    pub fn remove(&mut self, key: &SectionKey) -> Option<SectionContent> {
        let section = self.sections.get_mut(key.base())?;
        match key.channel() {
            Some(channel) => section.channels.shift_remove(channel),
            None => section.base_content.take(),
        }
    }

    /// Iterate over base section names
    pub fn base_keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::KeyMessage;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn store_with_tone() -> ContentStore {
        let mut store = ContentStore::new();
        store
            .write(
                &SectionKey::from_str("tone_of_voice.email").unwrap(),
                SectionContent::text("Warm and direct"),
            )
            .unwrap();
        store
            .write(
                &SectionKey::from_str("tone_of_voice.social").unwrap(),
                SectionContent::text("Playful"),
            )
            .unwrap();
        store
    }

    #[test]
    fn channel_write_isolates_siblings() {
        let mut store = store_with_tone();
        let social_before = store
            .get(&SectionKey::channeled("tone_of_voice", "social"))
            .cloned();

        store
            .write(
                &SectionKey::channeled("tone_of_voice", "email"),
                SectionContent::text("Clinical and concise"),
            )
            .unwrap();

        assert_eq!(
            store.get(&SectionKey::channeled("tone_of_voice", "social")),
            social_before.as_ref()
        );
        assert_eq!(
            store
                .get(&SectionKey::channeled("tone_of_voice", "email"))
                .and_then(SectionContent::as_text),
            Some("Clinical and concise")
        );
    }

    #[test]
    fn first_write_fixes_shape() {
        let mut store = ContentStore::new();
        let key = SectionKey::bare("key_messages");
        store
            .write(
                &key,
                SectionContent::messages(vec![KeyMessage::new("Efficacy", "Works")]),
            )
            .unwrap();

        let err = store
            .write(&key, SectionContent::text("not a list"))
            .unwrap_err();
        assert!(matches!(err, ContentError::ShapeMismatch { .. }));
    }

    #[test]
    fn shape_is_shared_across_channels() {
        let mut store = store_with_tone();
        let err = store
            .write(
                &SectionKey::channeled("tone_of_voice", "print"),
                SectionContent::messages(vec![]),
            )
            .unwrap_err();
        assert!(matches!(err, ContentError::ShapeMismatch { .. }));
    }

    #[test]
    fn get_missing_returns_none() {
        let store = store_with_tone();
        assert_eq!(store.get(&SectionKey::bare("objectives")), None);
        assert_eq!(
            store.get(&SectionKey::channeled("tone_of_voice", "print")),
            None
        );
    }

    #[test]
    fn bare_and_channeled_coexist() {
        let mut store = ContentStore::new();
        let bare = SectionKey::bare("compliance_notes");
        store
            .write(&bare, SectionContent::text("General disclaimer"))
            .unwrap();
        store
            .write(
                &SectionKey::channeled("compliance_notes", "email"),
                SectionContent::text("Email footer disclaimer"),
            )
            .unwrap();

        assert_eq!(
            store.get(&bare).and_then(SectionContent::as_text),
            Some("General disclaimer")
        );
        assert_eq!(
            store
                .get(&SectionKey::channeled("compliance_notes", "email"))
                .and_then(SectionContent::as_text),
            Some("Email footer disclaimer")
        );
    }
}
