//! Citation pool
//!
//! The candidate set of scientific citations with relevance metadata.
//! Citations are immutable once pooled; the pool is seeded by static demo
//! data outside this crate.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Stable citation identifier
///
/// Human-readable string ids (`imm-001`) rather than generated ids: the
/// demo pool and the fixed AI routing lists refer to citations by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CitationId(String);

impl CitationId {
    /// Create a citation id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CitationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Display for CitationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scientific citation with relevance metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Stable identifier
    pub id: CitationId,
    /// Paper title
    pub title: String,
    /// Author list
    pub authors: Vec<String>,
    /// Journal name
    pub journal: String,
    /// Publication year
    pub year: i32,
    /// Study type (e.g. "RCT", "Meta-analysis")
    pub study_type: String,
    /// Relevance score assigned at pool-build time
    pub relevance_score: f32,
    /// Source link, if available
    pub url: Option<String>,
    /// One-line summary, if available
    pub summary: Option<String>,
}

impl Citation {
    /// Create a citation with the required fields
    #[must_use]
    pub fn new(
        id: impl Into<CitationId>,
        title: impl Into<String>,
        journal: impl Into<String>,
        year: i32,
        study_type: impl Into<String>,
        relevance_score: f32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            journal: journal.into(),
            year,
            study_type: study_type.into(),
            relevance_score,
            url: None,
            summary: None,
        }
    }

    /// Set the author list
    #[inline]
    #[must_use]
    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    /// Set the source link
    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the one-line summary
    #[inline]
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

impl From<String> for CitationId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// The candidate citation pool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationPool {
    citations: Vec<Citation>,
}

impl CitationPool {
    /// Create a pool from its citations
    ///
    /// Later duplicates of an id are dropped; pool order is the seed order.
    #[must_use]
    pub fn new(citations: Vec<Citation>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let citations = citations
            .into_iter()
            .filter(|c| seen.insert(c.id.clone()))
            .collect();
        Self { citations }
    }

    /// Look up a citation by id
    #[must_use]
    pub fn get(&self, id: &CitationId) -> Option<&Citation> {
        self.citations.iter().find(|c| &c.id == id)
    }

    /// Whether the pool contains `id`
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &CitationId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate in pool order
    pub fn iter(&self) -> impl Iterator<Item = &Citation> {
        self.citations.iter()
    }

    /// Number of pooled citations
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.citations.len()
    }

    /// Whether the pool is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }

    /// Filter by a free-text query
    ///
    /// Case-insensitive match against title, authors, study type, and
    /// journal. An empty (or whitespace) query returns the full pool.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&Citation> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.citations.iter().collect();
        }

        self.citations
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&query)
                    || c.journal.to_lowercase().contains(&query)
                    || c.study_type.to_lowercase().contains(&query)
                    || c.authors
                        .iter()
                        .any(|a| a.to_lowercase().contains(&query))
            })
            .collect()
    }
}
