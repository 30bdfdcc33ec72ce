use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_search_input(text);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            let job_type = state.search_input().to_string();
            let seq = state.begin_search();
            vec![Effect::FetchJobs { seq, job_type }]
        }
        Msg::JobsLoaded { seq, query, result } => {
            // A newer search supersedes this one; drop the completion so a
            // slow response can never overwrite a fresher list.
            if !state.is_current(seq) {
                return (state, Vec::new());
            }
            match result {
                Ok(jobs) => {
                    state.apply_jobs(jobs);
                    if state.record_search(&query) {
                        vec![Effect::PersistRecentSearch(state.recent_search().clone())]
                    } else {
                        Vec::new()
                    }
                }
                Err(message) => {
                    state.push_error(message);
                    Vec::new()
                }
            }
        }
        Msg::JobSelected(job) => {
            state.select_job(job);
            Vec::new()
        }
        Msg::JobInteracted => {
            state.close_job();
            Vec::new()
        }
        Msg::JobListDismissed => {
            state.dismiss_job_list();
            Vec::new()
        }
        Msg::ErrorsDismissed => {
            state.clear_errors();
            Vec::new()
        }
        Msg::RecentSearchChanged(recent_search) => {
            state.patch_recent_search(recent_search);
            Vec::new()
        }
    };

    (state, effects)
}
