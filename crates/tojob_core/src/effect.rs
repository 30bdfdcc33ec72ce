use crate::model::RecentSearch;
use crate::state::SearchSeq;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Query the remote jobs service; the completion must be fed back as
    /// `Msg::JobsLoaded` carrying the same stamp.
    FetchJobs { seq: SearchSeq, job_type: String },
    /// Write the updated history to the config store.
    PersistRecentSearch(RecentSearch),
}
