use std::sync::Once;

use tojob_core::{update, AppState, Effect, Job, Msg, Screen, SearchSeq};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn job(title: &str) -> Job {
    Job {
        title: title.to_string(),
        description: None,
        company: None,
    }
}

/// Types a query and submits it, returning the new state and the stamp of
/// the fetch that was requested.
fn submit_search(state: AppState, query: &str) -> (AppState, SearchSeq) {
    let (state, _) = update(state, Msg::InputChanged(query.to_string()));
    let (state, effects) = update(state, Msg::SearchSubmitted);
    let seq = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchJobs { seq, job_type } => {
                assert_eq!(job_type, query);
                Some(*seq)
            }
            _ => None,
        })
        .expect("fetch effect");
    (state, seq)
}

fn complete_search(state: AppState, seq: SearchSeq, query: &str, jobs: Vec<Job>) -> AppState {
    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            seq,
            query: query.to_string(),
            result: Ok(jobs),
        },
    );
    state
}

fn fail_search(state: AppState, seq: SearchSeq, query: &str, message: &str) -> AppState {
    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            seq,
            query: query.to_string(),
            result: Err(message.to_string()),
        },
    );
    state
}

#[test]
fn initial_state_is_home() {
    init_logging();
    let state = AppState::new();
    let view = state.view();

    assert_eq!(view.screen(), Screen::Home);
    assert!(!view.is_loading());
    assert!(view.recent_search().is_empty());
    assert!(!view.search_enabled());
}

#[test]
fn successful_search_shows_results_with_first_job_selected() {
    init_logging();
    let (state, seq) = submit_search(AppState::new(), "go");
    assert!(state.view().is_loading());

    let state = complete_search(state, seq, "go", vec![job("A"), job("B")]);
    let view = state.view();

    assert_eq!(view.screen(), Screen::SearchResult);
    assert!(!view.is_loading());
    match view {
        tojob_core::HomeUiState::HasJobs(view) => {
            assert_eq!(view.selected_job.title, "A");
            assert_eq!(view.job_list.len(), 2);
        }
        other => panic!("expected HasJobs, got {other:?}"),
    }
}

#[test]
fn empty_result_stays_on_home() {
    init_logging();
    let (state, seq) = submit_search(AppState::new(), "cobol");
    let state = complete_search(state, seq, "cobol", Vec::new());

    assert_eq!(state.view().screen(), Screen::Home);
    assert!(!state.view().is_loading());
}

#[test]
fn select_then_back_returns_to_results_with_list_unchanged() {
    init_logging();
    let (state, seq) = submit_search(AppState::new(), "go");
    let state = complete_search(state, seq, "go", vec![job("A"), job("B")]);

    let (state, effects) = update(state, Msg::JobSelected(job("B")));
    assert!(effects.is_empty());
    assert_eq!(state.view().screen(), Screen::SearchDetail);

    let (state, _) = update(state, Msg::JobInteracted);
    let view = state.view();
    assert_eq!(view.screen(), Screen::SearchResult);
    match view {
        tojob_core::HomeUiState::HasJobs(view) => {
            assert_eq!(view.job_list.len(), 2);
            // Selection survives closing the detail.
            assert_eq!(view.selected_job.title, "B");
        }
        other => panic!("expected HasJobs, got {other:?}"),
    }
}

#[test]
fn dismissing_job_list_returns_home_from_any_screen() {
    init_logging();
    let (state, seq) = submit_search(AppState::new(), "go");
    let state = complete_search(state, seq, "go", vec![job("A")]);
    let (state, _) = update(state, Msg::JobSelected(job("A")));
    assert_eq!(state.view().screen(), Screen::SearchDetail);

    let (state, _) = update(state, Msg::JobListDismissed);
    assert_eq!(state.view().screen(), Screen::Home);
}

#[test]
fn new_results_reset_the_selection() {
    init_logging();
    let (state, seq) = submit_search(AppState::new(), "go");
    let state = complete_search(state, seq, "go", vec![job("A"), job("B")]);
    let (state, _) = update(state, Msg::JobSelected(job("B")));
    let (state, _) = update(state, Msg::JobInteracted);

    let (state, seq) = submit_search(state, "rust");
    let state = complete_search(state, seq, "rust", vec![job("C"), job("D")]);

    match state.view() {
        tojob_core::HomeUiState::HasJobs(view) => {
            assert_eq!(view.selected_job.title, "C");
        }
        other => panic!("expected HasJobs, got {other:?}"),
    }
}

#[test]
fn failure_appends_one_error_and_leaves_list_untouched() {
    init_logging();
    let (state, seq) = submit_search(AppState::new(), "go");
    let state = complete_search(state, seq, "go", vec![job("A"), job("B")]);

    let (state, seq) = submit_search(state, "go");
    let state = fail_search(state, seq, "go", "server unreachable");
    let view = state.view();

    assert!(!view.is_loading());
    assert_eq!(view.error_messages().len(), 1);
    assert_eq!(view.error_messages()[0].message, "server unreachable");
    assert_eq!(view.screen(), Screen::SearchResult);
    match view {
        tojob_core::HomeUiState::HasJobs(view) => assert_eq!(view.job_list.len(), 2),
        other => panic!("expected HasJobs, got {other:?}"),
    }
}

#[test]
fn dismissing_errors_clears_all_at_once() {
    init_logging();
    let (state, seq) = submit_search(AppState::new(), "go");
    let state = fail_search(state, seq, "go", "first");
    let (state, seq) = submit_search(state, "go");
    let state = fail_search(state, seq, "go", "second");

    let view = state.view();
    assert_eq!(view.error_messages().len(), 2);
    // Entries keep distinct identities for the dialog.
    assert_ne!(view.error_messages()[0].id, view.error_messages()[1].id);

    let (state, _) = update(state, Msg::ErrorsDismissed);
    assert!(state.view().error_messages().is_empty());
}

#[test]
fn full_session_scenario() {
    init_logging();
    // Search "go" succeeds with [A, B].
    let (state, seq) = submit_search(AppState::new(), "go");
    let state = complete_search(state, seq, "go", vec![job("A"), job("B")]);
    let view = state.view();
    assert_eq!(view.recent_search().entries(), ["go"]);
    assert_eq!(view.screen(), Screen::SearchResult);
    match &view {
        tojob_core::HomeUiState::HasJobs(view) => assert_eq!(view.selected_job.title, "A"),
        other => panic!("expected HasJobs, got {other:?}"),
    }

    // Open B, then go back.
    let (state, _) = update(state, Msg::JobSelected(job("B")));
    assert_eq!(state.view().screen(), Screen::SearchDetail);
    let (state, _) = update(state, Msg::JobInteracted);
    assert_eq!(state.view().screen(), Screen::SearchResult);

    // Repeat "go": moved to front, not duplicated.
    let (state, seq) = submit_search(state, "go");
    let state = complete_search(state, seq, "go", vec![job("A"), job("B")]);
    assert_eq!(state.view().recent_search().entries(), ["go"]);

    // A failing search leaves everything but the errors untouched.
    let (state, seq) = submit_search(state, "go");
    let state = fail_search(state, seq, "go", "boom");
    let view = state.view();
    assert_eq!(view.recent_search().entries(), ["go"]);
    assert_eq!(view.error_messages().len(), 1);
    match view {
        tojob_core::HomeUiState::HasJobs(view) => assert_eq!(view.job_list.len(), 2),
        other => panic!("expected HasJobs, got {other:?}"),
    }
}
