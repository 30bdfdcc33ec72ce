use crate::model::{ErrorMessage, Job, JobList, RecentSearch};

/// UI state for the Home route.
///
/// Derived from [`crate::AppState`], but split into two variants so each
/// screen only sees the fields that are valid for it: a selected job exists
/// exactly when a non-empty job list does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeUiState {
    /// There are no jobs to render, either because none were fetched yet or
    /// because the last fetch failed.
    NoJobs(NoJobsView),
    /// There are jobs to render; a selected job is guaranteed and is one of
    /// the listed jobs.
    HasJobs(JobListView),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoJobsView {
    pub is_loading: bool,
    pub error_messages: Vec<ErrorMessage>,
    pub search_input: String,
    pub recent_search: RecentSearch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListView {
    pub job_list: JobList,
    pub selected_job: Job,
    pub is_job_open: bool,
    pub is_loading: bool,
    pub error_messages: Vec<ErrorMessage>,
    pub search_input: String,
    pub recent_search: RecentSearch,
}

/// The three screens derivable from [`HomeUiState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    SearchResult,
    SearchDetail,
}

impl HomeUiState {
    pub fn screen(&self) -> Screen {
        match self {
            HomeUiState::NoJobs(_) => Screen::Home,
            HomeUiState::HasJobs(view) if view.is_job_open => Screen::SearchDetail,
            HomeUiState::HasJobs(_) => Screen::SearchResult,
        }
    }

    /// Whether the search button should be enabled.
    pub fn search_enabled(&self) -> bool {
        !self.search_input().trim().is_empty()
    }

    pub fn is_loading(&self) -> bool {
        match self {
            HomeUiState::NoJobs(view) => view.is_loading,
            HomeUiState::HasJobs(view) => view.is_loading,
        }
    }

    pub fn error_messages(&self) -> &[ErrorMessage] {
        match self {
            HomeUiState::NoJobs(view) => &view.error_messages,
            HomeUiState::HasJobs(view) => &view.error_messages,
        }
    }

    pub fn search_input(&self) -> &str {
        match self {
            HomeUiState::NoJobs(view) => &view.search_input,
            HomeUiState::HasJobs(view) => &view.search_input,
        }
    }

    pub fn recent_search(&self) -> &RecentSearch {
        match self {
            HomeUiState::NoJobs(view) => &view.recent_search,
            HomeUiState::HasJobs(view) => &view.recent_search,
        }
    }
}

impl Default for HomeUiState {
    fn default() -> Self {
        HomeUiState::NoJobs(NoJobsView::default())
    }
}
