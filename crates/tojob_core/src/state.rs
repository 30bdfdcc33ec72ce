use crate::model::{ErrorMessage, Job, JobList, RecentSearch};
use crate::view_model::{HomeUiState, JobListView, NoJobsView};

/// Stamp identifying one search request. Fetch completions carry the stamp
/// they were issued with; only the latest stamp is applied.
pub type SearchSeq = u64;

/// Raw snapshot of the Home route state.
///
/// All fields are private; transitions go through [`crate::update`] and the
/// presentation layer reads the derived [`HomeUiState`] via [`AppState::view`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    job_list: Option<JobList>,
    selected_job: Option<Job>,
    is_job_open: bool,
    is_loading: bool,
    error_messages: Vec<ErrorMessage>,
    search_input: String,
    recent_search: RecentSearch,
    search_seq: SearchSeq,
    next_error_id: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts this raw state into the strongly typed [`HomeUiState`]
    /// driving the UI.
    pub fn view(&self) -> HomeUiState {
        match &self.job_list {
            Some(job_list) if !job_list.is_empty() => {
                // The selected job is the one the user last picked, or the
                // first of the list when none was picked for this list.
                let selected_job = self
                    .selected_job
                    .clone()
                    .unwrap_or_else(|| job_list.jobs()[0].clone());
                HomeUiState::HasJobs(JobListView {
                    job_list: job_list.clone(),
                    selected_job,
                    is_job_open: self.is_job_open,
                    is_loading: self.is_loading,
                    error_messages: self.error_messages.clone(),
                    search_input: self.search_input.clone(),
                    recent_search: self.recent_search.clone(),
                })
            }
            _ => HomeUiState::NoJobs(NoJobsView {
                is_loading: self.is_loading,
                error_messages: self.error_messages.clone(),
                search_input: self.search_input.clone(),
                recent_search: self.recent_search.clone(),
            }),
        }
    }

    /// Returns whether the state changed since the last call, resetting the
    /// flag. The runtime uses this to coalesce view publication.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn recent_search(&self) -> &RecentSearch {
        &self.recent_search
    }

    pub(crate) fn search_input(&self) -> &str {
        &self.search_input
    }

    pub(crate) fn set_search_input(&mut self, text: String) {
        if self.search_input != text {
            self.search_input = text;
            self.mark_dirty();
        }
    }

    /// Starts a new search: flips the loading flag and issues a fresh stamp.
    /// An older in-flight search is superseded, not cancelled; its completion
    /// will fail the [`AppState::is_current`] check and be dropped.
    pub(crate) fn begin_search(&mut self) -> SearchSeq {
        self.search_seq += 1;
        self.is_loading = true;
        self.mark_dirty();
        self.search_seq
    }

    pub(crate) fn is_current(&self, seq: SearchSeq) -> bool {
        seq == self.search_seq
    }

    /// Applies a successful fetch: the list is replaced wholesale and the
    /// selection reset so the new list's first job is displayed.
    pub(crate) fn apply_jobs(&mut self, jobs: Vec<Job>) {
        self.job_list = Some(JobList::new(jobs));
        self.selected_job = None;
        self.is_loading = false;
        self.mark_dirty();
    }

    pub(crate) fn record_search(&mut self, query: &str) -> bool {
        let recorded = self.recent_search.record(query);
        if recorded {
            self.mark_dirty();
        }
        recorded
    }

    /// Applies a failed fetch: one error entry, list and history untouched.
    pub(crate) fn push_error(&mut self, message: String) {
        self.next_error_id += 1;
        self.error_messages.push(ErrorMessage {
            id: self.next_error_id,
            message,
        });
        self.is_loading = false;
        self.mark_dirty();
    }

    pub(crate) fn select_job(&mut self, job: Job) {
        self.selected_job = Some(job);
        self.is_job_open = true;
        self.mark_dirty();
    }

    pub(crate) fn close_job(&mut self) {
        if self.is_job_open {
            self.is_job_open = false;
            self.mark_dirty();
        }
    }

    pub(crate) fn dismiss_job_list(&mut self) {
        if self.job_list.is_some() {
            self.job_list = None;
            self.selected_job = None;
            self.is_job_open = false;
            self.mark_dirty();
        }
    }

    pub(crate) fn clear_errors(&mut self) {
        if !self.error_messages.is_empty() {
            self.error_messages.clear();
            self.mark_dirty();
        }
    }

    /// Field-level patch from the config store's change stream. Only the
    /// history is replaced; a concurrent fetch keeps its loading flag and
    /// whatever list it is about to install.
    pub(crate) fn patch_recent_search(&mut self, recent_search: RecentSearch) {
        if self.recent_search != recent_search {
            self.recent_search = recent_search;
            self.mark_dirty();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
