//! Generation seam and the mock generator
//!
//! [`SectionGenerator`] is where a real generation service would be
//! substituted. The mock picks a candidate from a fixed pool of variations
//! per base key, after a simulated latency, and always preserves the
//! content shape of the current value.

use async_trait::async_trait;
use brief_content::{KeyMessage, SectionContent, SectionKey};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Produces a regeneration candidate for a section
#[async_trait]
pub trait SectionGenerator: Send + Sync {
    /// Generate a candidate for `key`, guided by `prompt`
    ///
    /// # Contract
    /// - The candidate must have the same [`ContentKind`] as `current`.
    ///
    /// [`ContentKind`]: brief_content::ContentKind
    async fn generate(
        &self,
        key: &SectionKey,
        prompt: &str,
        current: &SectionContent,
    ) -> SectionContent;
}

/// Default simulated latency for the mock generator
pub const DEFAULT_REGEN_DELAY: Duration = Duration::from_millis(1200);

/// Mock generator with fixed per-section variation pools
#[derive(Debug)]
pub struct MockGenerator {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl MockGenerator {
    /// Create a mock generator with the default latency
    #[must_use]
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_REGEN_DELAY,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Override the simulated latency
    #[inline]
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Use a fixed seed so the variation pick is deterministic
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    fn pick<'a, T>(&self, pool: &'a [T]) -> &'a T {
        let idx = self.rng.lock().random_range(0..pool.len());
        &pool[idx]
    }

    fn text_pool(base: &str) -> &'static [&'static str] {
        match base {
            "objectives" => &[
                "Increase HCP awareness of the therapy's first-line eligibility by 25% this quarter.",
                "Position the brand as the evidence-backed standard of care among specialists.",
                "Drive guideline-concordant adoption across priority accounts before congress season.",
            ],
            "tone_of_voice" => &[
                "Confident and clinical, grounded in trial evidence, never promotional in register.",
                "Warm and plain-spoken, translating outcomes data into patient-relevant language.",
                "Direct and concise, leading with the strongest endpoint in every touchpoint.",
            ],
            "compliance_notes" => &[
                "All efficacy claims must cite the pivotal trial; fair balance required in every asset.",
                "Include full indication and safety information; no superiority claims versus named competitors.",
                "Adverse-event reporting language is mandatory on all channel variants of this brief.",
            ],
            _ => &[
                "Refreshed copy aligned to the campaign's core claim and brand guidelines.",
                "Alternative framing emphasizing patient outcomes over mechanism detail.",
                "Tightened wording for the channel's character constraints.",
            ],
        }
    }

    fn message_pool() -> &'static [&'static [(&'static str, &'static str)]] {
        &[
            &[
                ("Efficacy", "Demonstrated significant improvement in the primary endpoint versus comparator."),
                ("Safety", "Well-characterized safety profile across all pivotal studies."),
                ("Access", "Broad formulary coverage with patient support available at launch."),
            ],
            &[
                ("Efficacy", "Consistent benefit across prespecified subgroups, including elderly patients."),
                ("Convenience", "Once-daily oral dosing with no food restrictions."),
                ("Evidence", "Results replicated in real-world cohorts beyond the trial population."),
            ],
            &[
                ("Outcomes", "Sustained response maintained through the latest follow-up analysis."),
                ("Safety", "Discontinuation rates comparable to placebo in pooled analyses."),
                ("Guidelines", "Recommended by current treatment guidelines for eligible patients."),
            ],
        ]
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SectionGenerator for MockGenerator {
    async fn generate(
        &self,
        key: &SectionKey,
        prompt: &str,
        current: &SectionContent,
    ) -> SectionContent {
        tracing::debug!(key = %key, prompt, "mock generation started");
        tokio::time::sleep(self.delay).await;

        match current {
            SectionContent::Text(_) => {
                let variation = *self.pick(Self::text_pool(key.base()));
                SectionContent::text(variation)
            }
            SectionContent::KeyMessages(_) => {
                let variation = *self.pick(Self::message_pool());
                SectionContent::messages(
                    variation
                        .iter()
                        .map(|(tag, description)| KeyMessage::new(*tag, *description))
                        .collect(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief_content::ContentKind;

    fn fast() -> MockGenerator {
        MockGenerator::new().with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn preserves_text_shape() {
        let generator = fast();
        let key = SectionKey::bare("objectives");
        let current = SectionContent::text("old objective");

        let candidate = generator.generate(&key, "sharper", &current).await;
        assert_eq!(candidate.kind(), ContentKind::Text);
        assert_ne!(candidate, current);
    }

    #[tokio::test]
    async fn preserves_message_shape() {
        let generator = fast();
        let key = SectionKey::bare("key_messages");
        let current = SectionContent::messages(vec![KeyMessage::new("Old", "old")]);

        let candidate = generator.generate(&key, "", &current).await;
        assert_eq!(candidate.kind(), ContentKind::KeyMessages);
        assert!(!candidate.as_messages().unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeded_pick_is_deterministic() {
        let key = SectionKey::bare("tone_of_voice");
        let current = SectionContent::text("old tone");

        let a = fast()
            .with_seed(7)
            .generate(&key, "", &current)
            .await;
        let b = fast()
            .with_seed(7)
            .generate(&key, "", &current)
            .await;
        assert_eq!(a, b);
    }
}
