//! Brief session
//!
//! One object owning all mutable state for an open campaign brief: the
//! content store, the revision engine over it, the citation pool and
//! selection engine, and the four preset editors. Callers hold the
//! session and go through it; there is no ambient global store.

use crate::config::EngineConfig;
use crate::presets::{
    AudiencePreset, CompanyGuidelines, Personality, PresetEditor, ProductGuidelines,
};
use brief_citation::{
    AiSearchOutcome, AiSelectionMode, Citation, CitationId, CitationPool, SearchContext,
    SelectionEngine,
};
use brief_content::{ContentError, ContentStore, SectionContent, SectionKey};
use brief_revision::{
    MockGenerator, RegenerationOutcome, RevisionEngine, RevisionError, RevisionPhase,
    SectionGenerator,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// All mutable state for one open campaign brief
///
/// Engines share the content store through an `Arc`; the session is the
/// sole surface callers mutate or query through. Cheap to share behind
/// an `Arc` itself since every operation takes `&self`.
pub struct BriefSession {
    config: EngineConfig,
    store: Arc<RwLock<ContentStore>>,
    revision: RevisionEngine,
    selection: SelectionEngine,
    guidelines: PresetEditor<CompanyGuidelines>,
    personalities: PresetEditor<Personality>,
    audiences: PresetEditor<AudiencePreset>,
    products: PresetEditor<ProductGuidelines>,
}

impl std::fmt::Debug for BriefSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BriefSession")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BriefSession {
    /// Build a session from a config and seeded content/pool
    #[must_use]
    pub fn new(config: EngineConfig, store: ContentStore, pool: CitationPool) -> Self {
        let mut generator = MockGenerator::new().with_delay(config.regen_delay());
        if let Some(seed) = config.generator_seed {
            generator = generator.with_seed(seed);
        }
        Self::with_generator(config, store, pool, Arc::new(generator))
    }

    /// Build a session with a custom generator behind the seam
    #[must_use]
    pub fn with_generator(
        config: EngineConfig,
        store: ContentStore,
        pool: CitationPool,
        generator: Arc<dyn SectionGenerator>,
    ) -> Self {
        let store = Arc::new(RwLock::new(store));
        let revision = RevisionEngine::new(Arc::clone(&store), generator);
        let selection =
            SelectionEngine::new(Arc::new(pool)).with_search_delay(config.search_delay());

        tracing::info!(
            regen_delay_ms = config.regen_delay_ms,
            search_delay_ms = config.search_delay_ms,
            "brief session opened"
        );

        Self {
            config,
            store,
            revision,
            selection,
            guidelines: PresetEditor::new(),
            personalities: PresetEditor::new(),
            audiences: PresetEditor::new(),
            products: PresetEditor::new(),
        }
    }

    /// The configuration this session was built from
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ---- brief content ----

    /// Live content for a key
    #[must_use]
    pub fn content(&self, key: &SectionKey) -> Option<SectionContent> {
        self.store.read().get(key).cloned()
    }

    /// Base keys of all seeded sections
    #[must_use]
    pub fn section_keys(&self) -> Vec<String> {
        let store = self.store.read();
        store.base_keys().map(str::to_owned).collect()
    }

    /// Direct-edit path; does not touch revision state
    pub fn update_brief_section(
        &self,
        key: &SectionKey,
        content: SectionContent,
    ) -> Result<(), ContentError> {
        self.revision.update_brief_section(key, content)
    }

    /// Shared handle over the content store
    ///
    /// For callers that need to seed additional sections after
    /// construction.
    #[must_use]
    pub fn store(&self) -> Arc<RwLock<ContentStore>> {
        Arc::clone(&self.store)
    }

    // ---- section regeneration ----

    /// See [`RevisionEngine::regenerate_section`]
    pub async fn regenerate_section(
        &self,
        key: &SectionKey,
        prompt: &str,
    ) -> Result<RegenerationOutcome, RevisionError> {
        self.revision.regenerate_section(key, prompt).await
    }

    /// See [`RevisionEngine::accept_regeneration`]
    pub fn accept_regeneration(&self, key: &SectionKey) -> Result<bool, ContentError> {
        self.revision.accept_regeneration(key)
    }

    /// See [`RevisionEngine::reject_regeneration`]
    pub fn reject_regeneration(&self, key: &SectionKey) -> bool {
        self.revision.reject_regeneration(key)
    }

    /// See [`RevisionEngine::undo_confirmed_regeneration`]
    pub fn undo_confirmed_regeneration(&self, key: &SectionKey) -> Result<bool, ContentError> {
        self.revision.undo_confirmed_regeneration(key)
    }

    /// Current revision phase for a key
    #[inline]
    #[must_use]
    pub fn phase(&self, key: &SectionKey) -> RevisionPhase {
        self.revision.phase(key)
    }

    /// Staged candidate awaiting accept/reject, if any
    #[must_use]
    pub fn staged_content(&self, key: &SectionKey) -> Option<SectionContent> {
        self.revision.staged_content(key)
    }

    /// The revision engine itself, for lower-level queries
    #[inline]
    #[must_use]
    pub fn revision(&self) -> &RevisionEngine {
        &self.revision
    }

    // ---- citation selection ----

    /// Toggle a citation in or out of the selection
    pub fn toggle_citation(&self, id: &CitationId) -> Vec<CitationId> {
        self.selection.toggle(id)
    }

    /// Set how the next AI search combines with the selection
    pub fn set_citation_mode(&self, mode: AiSelectionMode) {
        self.selection.set_mode(mode)
    }

    /// Run the AI-assisted citation search
    pub async fn search_citations(&self, context: &SearchContext) -> AiSearchOutcome {
        self.selection.search_with_ai(context).await
    }

    /// Selected citations in pool order
    #[must_use]
    pub fn selected_citations(&self) -> Vec<Citation> {
        self.selection.selected_citations()
    }

    /// The selection engine itself, for lower-level queries
    #[inline]
    #[must_use]
    pub fn citations(&self) -> &SelectionEngine {
        &self.selection
    }

    // ---- preset editors ----

    /// Company guidelines editor (singleton record)
    #[inline]
    #[must_use]
    pub fn guidelines(&self) -> &PresetEditor<CompanyGuidelines> {
        &self.guidelines
    }

    /// Communication personality editor
    #[inline]
    #[must_use]
    pub fn personalities(&self) -> &PresetEditor<Personality> {
        &self.personalities
    }

    /// Target-audience preset editor
    #[inline]
    #[must_use]
    pub fn audiences(&self) -> &PresetEditor<AudiencePreset> {
        &self.audiences
    }

    /// Product guidelines editor
    #[inline]
    #[must_use]
    pub fn products(&self) -> &PresetEditor<ProductGuidelines> {
        &self.products
    }
}
