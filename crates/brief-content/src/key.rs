//! Section keys for addressing brief content
//!
//! Provides [`SectionKey`] for addressing a section of generated brief
//! content, optionally qualified by a distribution channel.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Address of a brief section
///
/// A key is either a bare base key (`objectives`) or a channel-qualified
/// composite (`tone_of_voice.email`). The base key fixes the content shape;
/// the channel selects one entry of the per-channel map.
///
/// # Examples
/// - `objectives` → base only
/// - `tone_of_voice.email` → tone of voice, email channel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionKey {
    base: String,
    channel: Option<String>,
}

impl SectionKey {
    /// Create a bare (channel-less) key
    #[inline]
    #[must_use]
    pub fn bare(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            channel: None,
        }
    }

    /// Create a channel-qualified key
    #[inline]
    #[must_use]
    pub fn channeled(base: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            channel: Some(channel.into()),
        }
    }

    /// Base section name
    #[inline]
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Channel qualifier, if any
    #[inline]
    #[must_use]
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    /// Strip the channel qualifier
    #[inline]
    #[must_use]
    pub fn as_bare(&self) -> Self {
        Self::bare(self.base.clone())
    }
}

/// Error parsing a section key
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SectionKeyError {
    /// Key is empty
    #[error("empty section key")]
    Empty,

    /// Key has more than one channel separator
    #[error("too many segments in section key: {0}")]
    TooManySegments(String),

    /// A segment is empty (`.email`, `objectives.`)
    #[error("empty segment in section key: {0}")]
    EmptySegment(String),
}

impl FromStr for SectionKey {
    type Err = SectionKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SectionKeyError::Empty);
        }

        let mut parts = s.split('.');
        let base = parts.next().unwrap_or_default();
        let channel = parts.next();

        if parts.next().is_some() {
            return Err(SectionKeyError::TooManySegments(s.to_string()));
        }
        if base.is_empty() || channel.is_some_and(str::is_empty) {
            return Err(SectionKeyError::EmptySegment(s.to_string()));
        }

        Ok(match channel {
            Some(channel) => Self::channeled(base, channel),
            None => Self::bare(base),
        })
    }
}

impl Display for SectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.channel {
            Some(channel) => write!(f, "{}.{}", self.base, channel),
            None => write!(f, "{}", self.base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_key_round_trip() {
        let key = SectionKey::from_str("objectives").unwrap();
        assert_eq!(key.base(), "objectives");
        assert_eq!(key.channel(), None);
        assert_eq!(key.to_string(), "objectives");
    }

    #[test]
    fn channeled_key_round_trip() {
        let key = SectionKey::from_str("tone_of_voice.email").unwrap();
        assert_eq!(key.base(), "tone_of_voice");
        assert_eq!(key.channel(), Some("email"));
        assert_eq!(key.to_string(), "tone_of_voice.email");
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert_eq!(SectionKey::from_str(""), Err(SectionKeyError::Empty));
        assert!(matches!(
            SectionKey::from_str("a.b.c"),
            Err(SectionKeyError::TooManySegments(_))
        ));
        assert!(matches!(
            SectionKey::from_str(".email"),
            Err(SectionKeyError::EmptySegment(_))
        ));
        assert!(matches!(
            SectionKey::from_str("objectives."),
            Err(SectionKeyError::EmptySegment(_))
        ));
    }

    #[test]
    fn as_bare_strips_channel() {
        let key = SectionKey::channeled("key_messages", "social");
        assert_eq!(key.as_bare(), SectionKey::bare("key_messages"));
    }
}
