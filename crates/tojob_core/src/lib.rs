//! ToJob core: pure state machine and view-model helpers.
mod effect;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use model::{Company, ErrorMessage, Job, JobList, RecentSearch, MAX_SEARCH_HISTORY};
pub use msg::Msg;
pub use state::{AppState, SearchSeq};
pub use update::update;
pub use view_model::{HomeUiState, JobListView, NoJobsView, Screen};
