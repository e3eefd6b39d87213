//! Demo fixtures
//!
//! The seeded campaign brief, citation pool, and preset records the demo
//! binary and the test suites share. Content mirrors what the external
//! brief-generation step would produce.

use crate::config::EngineConfig;
use crate::presets::{
    AudiencePreset, CompanyGuidelines, Personality, ProductGuidelines, SINGLETON_KEY,
};
use crate::session::BriefSession;
use brief_citation::{Citation, CitationPool};
use brief_content::{ContentStore, KeyMessage, SectionContent, SectionKey};

/// Demo citation pool
///
/// Includes the fixed immunotherapy (`imm-*`) and Lokelma (`lok-*`) id
/// groups the AI routing rule refers to, plus general cardiology entries.
#[must_use]
pub fn demo_citation_pool() -> CitationPool {
    CitationPool::new(vec![
        Citation::new(
            "imm-001",
            "Pembrolizumab versus chemotherapy in PD-L1-positive NSCLC",
            "New England Journal of Medicine",
            2023,
            "RCT",
            0.96,
        )
        .with_authors(vec!["Reck M".to_string(), "Garon E".to_string()])
        .with_summary("Checkpoint inhibition extends survival in first-line NSCLC."),
        Citation::new(
            "imm-002",
            "Nivolumab plus ipilimumab in advanced melanoma: 5-year outcomes",
            "The Lancet Oncology",
            2022,
            "RCT",
            0.92,
        )
        .with_authors(vec!["Wolchok J".to_string()]),
        Citation::new(
            "imm-003",
            "Biomarkers of response to immune checkpoint blockade",
            "Nature Reviews Cancer",
            2023,
            "Review",
            0.88,
        )
        .with_authors(vec!["Topalian S".to_string()]),
        Citation::new(
            "imm-004",
            "Immune-related adverse events: a pooled safety analysis",
            "Journal of Clinical Oncology",
            2021,
            "Meta-analysis",
            0.84,
        )
        .with_authors(vec!["Postow M".to_string()]),
        Citation::new(
            "lok-001",
            "Sodium zirconium cyclosilicate for hyperkalemia maintenance",
            "New England Journal of Medicine",
            2021,
            "RCT",
            0.94,
        )
        .with_authors(vec!["Kosiborod M".to_string()]),
        Citation::new(
            "lok-002",
            "Potassium binders and RAASi continuation in heart failure",
            "European Heart Journal",
            2022,
            "Cohort",
            0.87,
        )
        .with_authors(vec!["Pitt B".to_string()]),
        Citation::new(
            "lok-003",
            "Long-term safety of zirconium cyclosilicate in CKD",
            "Kidney International",
            2020,
            "RCT",
            0.81,
        )
        .with_authors(vec!["Roger S".to_string()]),
        Citation::new(
            "card-001",
            "SGLT2 inhibition across the spectrum of heart failure",
            "Circulation",
            2023,
            "Meta-analysis",
            0.9,
        )
        .with_authors(vec!["Vaduganathan M".to_string()]),
        Citation::new(
            "card-002",
            "Guideline-directed medical therapy uptake in HFrEF",
            "JAMA Cardiology",
            2022,
            "Cohort",
            0.76,
        )
        .with_authors(vec!["Greene S".to_string()]),
        Citation::new(
            "card-003",
            "Blood pressure targets in older adults",
            "The BMJ",
            2021,
            "RCT",
            0.7,
        )
        .with_authors(vec!["Zhang W".to_string()]),
    ])
}

/// Content store seeded the way the external brief-generation step would
///
/// # Panics
/// Never: all writes are first writes for their base keys.
#[must_use]
pub fn demo_content_store() -> ContentStore {
    let mut store = ContentStore::new();

    let seeds = [
        (
            SectionKey::bare("objectives"),
            SectionContent::text("Raise first-line awareness among oncologists by 20% this year."),
        ),
        (
            SectionKey::bare("key_messages"),
            SectionContent::messages(vec![
                KeyMessage::new("Efficacy", "Significant survival benefit versus chemotherapy."),
                KeyMessage::new("Safety", "Manageable and well-characterized safety profile."),
            ]),
        ),
        (
            SectionKey::channeled("tone_of_voice", "email"),
            SectionContent::text("Clinical, concise, evidence-first."),
        ),
        (
            SectionKey::channeled("tone_of_voice", "social"),
            SectionContent::text("Accessible and patient-centric."),
        ),
        (
            SectionKey::bare("compliance_notes"),
            SectionContent::text("All claims must cite the pivotal trial; include fair balance."),
        ),
    ];
    for (key, content) in seeds {
        // First writes fix their section shapes; mismatch is impossible here
        store.write(&key, content).expect("seed write");
    }

    store
}

/// Session over the demo fixtures, with preset records seeded
#[must_use]
pub fn demo_session(config: EngineConfig) -> BriefSession {
    let session = BriefSession::new(config, demo_content_store(), demo_citation_pool());

    session.guidelines().insert(
        SINGLETON_KEY,
        CompanyGuidelines {
            tone: "Professional and evidence-led".into(),
            phrases_to_avoid: vec!["best-in-class".into(), "game-changing".into()],
            regulatory_notes: "Every efficacy claim needs a referenced trial.".into(),
        },
    );
    session.personalities().insert(
        "clinician",
        Personality {
            name: "The Clinician".into(),
            description: "Speaks to peers in trial endpoints".into(),
            voice: "precise".into(),
        },
    );
    session.audiences().insert(
        "community-oncologists",
        AudiencePreset {
            name: "Community oncologists".into(),
            segment: "US community practice".into(),
            pain_points: vec![
                "limited consult time".into(),
                "biomarker testing turnaround".into(),
            ],
        },
    );
    session.products().insert(
        "onkavio",
        ProductGuidelines {
            product: "Onkavio".into(),
            approved_claims: vec!["Improves overall survival in first-line NSCLC".into()],
            disclaimers: vec!["See full prescribing information.".into()],
        },
    );

    session
}
