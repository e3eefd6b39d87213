//! Tagged section content
//!
//! Brief sections hold either free text or a structured list of tagged key
//! messages. The union is carried natively through the revision state
//! machine, so no serialization round-trip is needed between capture and
//! accept.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use ulid::Ulid;

/// Unique key-message identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KeyMessageId(pub Ulid);

impl KeyMessageId {
    /// Generate new key-message ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for KeyMessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for KeyMessageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single tagged key message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMessage {
    /// Stable identifier
    pub id: KeyMessageId,
    /// Short tag (e.g. "Efficacy", "Safety")
    pub tag: String,
    /// Message body
    pub description: String,
}

impl KeyMessage {
    /// Create a new key message with a fresh id
    #[inline]
    #[must_use]
    pub fn new(tag: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: KeyMessageId::new(),
            tag: tag.into(),
            description: description.into(),
        }
    }
}

/// Content shape of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    /// Plain text
    Text,
    /// Structured key-message list
    KeyMessages,
}

/// Section content
///
/// # Invariants
/// - A section's kind is fixed by its base key and never changes shape
///   across transitions or channels (enforced by the content store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SectionContent {
    /// Free-form text
    Text(String),
    /// Tagged key messages
    KeyMessages(Vec<KeyMessage>),
}

impl SectionContent {
    /// Create text content
    #[inline]
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create key-message content
    #[inline]
    #[must_use]
    pub fn messages(messages: Vec<KeyMessage>) -> Self {
        Self::KeyMessages(messages)
    }

    /// Content shape
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Text(_) => ContentKind::Text,
            Self::KeyMessages(_) => ContentKind::KeyMessages,
        }
    }

    /// Check whether the content is empty
    ///
    /// Empty sections are not eligible for regeneration.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::KeyMessages(messages) => messages.is_empty(),
        }
    }

    /// Text body, if this is text content
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::KeyMessages(_) => None,
        }
    }

    /// Key messages, if this is structured content
    #[inline]
    #[must_use]
    pub fn as_messages(&self) -> Option<&[KeyMessage]> {
        match self {
            Self::Text(_) => None,
            Self::KeyMessages(messages) => Some(messages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(SectionContent::text("x").kind(), ContentKind::Text);
        assert_eq!(
            SectionContent::messages(vec![]).kind(),
            ContentKind::KeyMessages
        );
    }

    #[test]
    fn emptiness() {
        assert!(SectionContent::text("   ").is_empty());
        assert!(!SectionContent::text("Drive awareness").is_empty());
        assert!(SectionContent::messages(vec![]).is_empty());
        assert!(!SectionContent::messages(vec![KeyMessage::new("Efficacy", "Works")]).is_empty());
    }

    #[test]
    fn serde_round_trip() {
        let content = SectionContent::messages(vec![KeyMessage::new(
            "Safety",
            "Well tolerated in trials",
        )]);
        let json = serde_json::to_string(&content).unwrap();
        let back: SectionContent = serde_json::from_str(&json).unwrap();
        assert_eq!(content, back);
    }
}
