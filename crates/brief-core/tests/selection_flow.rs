//! End-to-end citation selection flows through the session surface

use brief_citation::{AiSelectionMode, CitationId, SearchContext};
use brief_core::BriefSession;
use brief_test_utils::fast_session;
use pretty_assertions::assert_eq;

fn session() -> BriefSession {
    fast_session()
}

fn ids(raw: &[&str]) -> Vec<CitationId> {
    raw.iter().map(|id| CitationId::new(*id)).collect()
}

#[tokio::test]
async fn merge_search_keeps_manual_picks() {
    let session = session();
    session.toggle_citation(&CitationId::new("card-001"));
    session.set_citation_mode(AiSelectionMode::Merge);

    let outcome = session
        .search_citations(&SearchContext::for_topic("immunotherapy"))
        .await;

    assert_eq!(outcome.previous_count, 1);
    assert_eq!(
        outcome.candidate_ids,
        ids(&["imm-001", "imm-002", "imm-003", "imm-004"])
    );
    assert_eq!(outcome.final_count, 5);
    assert!(session.citations().is_selected(&CitationId::new("card-001")));
}

#[tokio::test]
async fn replace_search_discards_manual_picks() {
    let session = session();
    session.toggle_citation(&CitationId::new("card-001"));
    session.set_citation_mode(AiSelectionMode::Replace);

    let outcome = session
        .search_citations(&SearchContext::for_topic("hyperkalemia management"))
        .await;

    assert_eq!(outcome.candidate_ids, ids(&["lok-001", "lok-002", "lok-003"]));
    assert!(!session.citations().is_selected(&CitationId::new("card-001")));
    assert_eq!(session.citations().selection_count(), 3);
}

#[tokio::test]
async fn generic_topic_falls_back_to_ranking() {
    let session = session();
    session.set_citation_mode(AiSelectionMode::Replace);

    let outcome = session
        .search_citations(&SearchContext::for_topic("heart failure therapy"))
        .await;

    // (relevance desc, year desc, title asc) over the demo pool, top four
    assert_eq!(
        outcome.candidate_ids,
        ids(&["imm-001", "lok-001", "imm-002", "card-001"])
    );
}

#[tokio::test]
async fn brief_scoped_context_routes_like_topic() {
    let session = session();
    session.set_citation_mode(AiSelectionMode::Replace);

    let context = SearchContext::new("brief-42", "immunotherapy launch");
    let outcome = session.search_citations(&context).await;
    assert_eq!(
        outcome.candidate_ids,
        ids(&["imm-001", "imm-002", "imm-003", "imm-004"])
    );
}

#[test]
fn selected_citations_render_in_pool_order() {
    let session = session();
    session.toggle_citation(&CitationId::new("card-002"));
    session.toggle_citation(&CitationId::new("imm-003"));

    let selected: Vec<_> = session
        .selected_citations()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(selected, ids(&["imm-003", "card-002"]));
}

#[test]
fn pool_filter_matches_across_fields() {
    let session = session();
    let matches = session.citations().filtered_citations("hyperkalemia");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, CitationId::new("lok-001"));

    // Empty query returns the whole pool
    assert_eq!(session.citations().filtered_citations("").len(), 10);
}

#[test]
fn toggle_round_trip_restores_empty_selection() {
    let session = session();
    let id = CitationId::new("imm-001");
    session.toggle_citation(&id);
    session.toggle_citation(&id);
    assert_eq!(session.citations().selection_count(), 0);
}
