//! ToJob engine: IO boundaries for the jobs service and the config store.
mod configs;
mod fake;
mod jobs;
mod persist;
mod types;

pub use configs::{AppConfigs, FileAppConfigs, CONFIG_FILENAME};
pub use fake::{fake_job_list, FakeJobsSource};
pub use jobs::{GraphqlJobsSource, JobsSource, QuerySettings, DEFAULT_ENDPOINT};
pub use persist::{atomic_write, PersistError};
pub use types::{QueryError, QueryFailure};
