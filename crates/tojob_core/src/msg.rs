use crate::model::{Job, RecentSearch};
use crate::state::SearchSeq;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input box.
    InputChanged(String),
    /// User submitted the current search input as a job-type query.
    SearchSubmitted,
    /// A fetch issued by `SearchSubmitted` completed. `seq` is the stamp the
    /// fetch was issued with; `query` is the text that was searched.
    JobsLoaded {
        seq: SearchSeq,
        query: String,
        result: Result<Vec<Job>, String>,
    },
    /// User clicked a job in the result list.
    JobSelected(Job),
    /// User navigated back from the job detail.
    JobInteracted,
    /// User navigated back from the result list to home.
    JobListDismissed,
    /// User acknowledged the error dialog.
    ErrorsDismissed,
    /// The config store published a new recent-search history.
    RecentSearchChanged(RecentSearch),
}
