use std::sync::Once;

use pretty_assertions::assert_eq;
use scan_core::{
    update, AppState, CandidateFile, Contact, Cursor, Effect, FailureStage, Job, JobPage, Msg,
    PaginationError, Phase, ScanResult, WorkflowState, PAGINATION_FALLBACK_MESSAGE,
    PDF_MEDIA_TYPE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scan_logging::initialize_for_tests);
}

fn job(id: &str) -> Job {
    Job {
        title: format!("Role {id}"),
        company: "Acme".to_string(),
        location: "Pune".to_string(),
        url: format!("https://jobs.example.com/{id}"),
    }
}

fn page(ids: &[&str], next: Option<&str>) -> JobPage {
    JobPage {
        jobs: ids.iter().map(|id| job(id)).collect(),
        next_cursor: next.map(Cursor::new),
    }
}

fn job_ids(state: &AppState) -> Vec<String> {
    state
        .view()
        .jobs
        .into_iter()
        .map(|row| row.url.rsplit('/').next().unwrap_or_default().to_string())
        .collect()
}

/// Drives the machine through a successful upload with the given first page.
fn scanned(skills: &[&str], first: JobPage) -> AppState {
    let file = CandidateFile::new("cv.pdf", PDF_MEDIA_TYPE, b"%PDF".to_vec());
    let (state, _) = update(AppState::new(), Msg::FileChosen(file));
    let (state, _) = update(state, Msg::ScanClicked);
    let result = ScanResult::new(
        Contact::default(),
        skills.iter().map(|s| s.to_string()).collect(),
        first,
    );
    let (mut state, _) = update(state, Msg::UploadFinished(Ok(result)));
    state.consume_dirty();
    state
}

#[test]
fn load_more_emits_fetch_with_skills_and_cursor() {
    init_logging();
    let state = scanned(&["python", "sql"], page(&["j1"], Some("p2")));
    let (state, effects) = update(state, Msg::LoadMoreClicked);

    assert_eq!(state.view().phase, Phase::PaginatingMore);
    assert!(state.view().busy);
    assert!(!state.view().can_load_more);
    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            skills: vec!["python".to_string(), "sql".to_string()],
            cursor: Cursor::new("p2"),
        }]
    );
}

#[test]
fn load_more_without_cursor_is_noop() {
    init_logging();
    let state = scanned(&["python"], page(&["j1", "j2"], None));
    let before = state.clone();
    let (mut state, effects) = update(state, Msg::LoadMoreClicked);

    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(!state.consume_dirty());
    assert!(!state.view().can_load_more);
}

#[test]
fn load_more_without_skills_is_noop() {
    init_logging();
    let state = scanned(&[], page(&[], Some("p2")));
    let (state, effects) = update(state, Msg::LoadMoreClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().phase, Phase::ScanReady);
}

#[test]
fn second_load_more_while_paginating_is_rejected() {
    init_logging();
    let state = scanned(&["rust"], page(&["j1"], Some("p2")));
    let (state, first) = update(state, Msg::LoadMoreClicked);
    let (state, second) = update(state, Msg::LoadMoreClicked);

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());

    let (state, _) = update(state, Msg::PageFetched(Ok(page(&["j2"], Some("p3")))));
    // A duplicate completion for the same request must not append again.
    let (state, _) = update(state, Msg::PageFetched(Ok(page(&["j2"], Some("p3")))));
    assert_eq!(job_ids(&state), vec!["j1", "j2"]);
}

#[test]
fn pages_append_in_order() {
    init_logging();
    let state = scanned(&["rust"], page(&[], Some("p1")));

    let (state, _) = update(state, Msg::LoadMoreClicked);
    let (state, _) = update(state, Msg::PageFetched(Ok(page(&["j1", "j2"], Some("p2")))));
    let (state, _) = update(state, Msg::LoadMoreClicked);
    let (state, _) = update(state, Msg::PageFetched(Ok(page(&["j3"], None))));

    assert_eq!(job_ids(&state), vec!["j1", "j2", "j3"]);
    let view = state.view();
    assert_eq!(view.phase, Phase::ScanReady);
    assert!(!view.can_load_more);
    assert_eq!(state.workflow().result().and_then(ScanResult::cursor), None);
}

#[test]
fn page_failure_preserves_accumulated_jobs() {
    init_logging();
    let state = scanned(&["rust"], page(&["j1", "j2", "j3"], Some("p2")));
    let (state, _) = update(state, Msg::LoadMoreClicked);
    let (state, effects) = update(
        state,
        Msg::PageFetched(Err(PaginationError::Transport("timed out".to_string()))),
    );

    assert!(effects.is_empty());
    assert_eq!(job_ids(&state), vec!["j1", "j2", "j3"]);
    match state.workflow() {
        WorkflowState::Failed {
            stage,
            message,
            prior: Some(prior),
            file: None,
        } => {
            assert_eq!(*stage, FailureStage::Pagination);
            assert_eq!(message, PAGINATION_FALLBACK_MESSAGE);
            assert_eq!(prior.jobs().len(), 3);
            assert_eq!(prior.cursor(), Some(&Cursor::new("p2")));
        }
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn page_failure_surfaces_collaborator_message() {
    init_logging();
    let state = scanned(&["rust"], page(&["j1"], Some("p2")));
    let (state, _) = update(state, Msg::LoadMoreClicked);
    let (state, _) = update(
        state,
        Msg::PageFetched(Err(PaginationError::CollaboratorRejected {
            status: 502,
            message: Some("Job board unavailable".to_string()),
        })),
    );

    assert_eq!(state.view().error.as_deref(), Some("Job board unavailable"));
}

#[test]
fn load_more_after_page_failure_retries_same_cursor() {
    init_logging();
    let state = scanned(&["rust"], page(&["j1"], Some("p2")));
    let (state, _) = update(state, Msg::LoadMoreClicked);
    let (state, _) = update(
        state,
        Msg::PageFetched(Err(PaginationError::Transport("reset".to_string()))),
    );
    let (state, effects) = update(state, Msg::LoadMoreClicked);

    assert_eq!(state.view().phase, Phase::PaginatingMore);
    assert_eq!(state.view().error, None);
    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            skills: vec!["rust".to_string()],
            cursor: Cursor::new("p2"),
        }]
    );

    let (state, _) = update(state, Msg::PageFetched(Ok(page(&["j2"], None))));
    assert_eq!(job_ids(&state), vec!["j1", "j2"]);
}

#[test]
fn stale_page_completion_in_scan_ready_is_dropped() {
    init_logging();
    let state = scanned(&["rust"], page(&["j1"], Some("p2")));
    let (state, effects) = update(state, Msg::PageFetched(Ok(page(&["jx"], None))));

    assert!(effects.is_empty());
    assert_eq!(job_ids(&state), vec!["j1"]);
    assert_eq!(
        state.workflow().result().and_then(ScanResult::cursor),
        Some(&Cursor::new("p2"))
    );
}

#[test]
fn file_choice_ignored_while_paginating() {
    init_logging();
    let state = scanned(&["rust"], page(&["j1"], Some("p2")));
    let (state, _) = update(state, Msg::LoadMoreClicked);
    let file = CandidateFile::new("new.pdf", PDF_MEDIA_TYPE, vec![1]);
    let (state, effects) = update(state, Msg::FileChosen(file));

    assert!(effects.is_empty());
    assert_eq!(state.view().phase, Phase::PaginatingMore);
}
