use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use app_logging::{app_error, app_warn};
use serde::{Deserialize, Serialize};
use tojob_core::RecentSearch;
use tokio::sync::watch;

use crate::persist::atomic_write;

pub const CONFIG_FILENAME: &str = "app_configs.ron";

/// Boundary to the persisted app configuration.
///
/// Reads are continuous streams of the current value; writes are
/// fire-and-forget from the caller's perspective, with failures logged and
/// absorbed here.
pub trait AppConfigs: Send + Sync {
    /// Stream of the first-launch flag; defaults to `true` when nothing was
    /// persisted or the read failed.
    fn is_first_launch(&self) -> watch::Receiver<bool>;
    /// Stream of the recent-search history; defaults to empty.
    fn recent_search(&self) -> watch::Receiver<RecentSearch>;
    fn set_first_launch(&self, first_launch: bool);
    fn update_recent_search(&self, recent_search: &RecentSearch);
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct PersistedConfigs {
    is_first_launch: bool,
    recent_search_keyword: String,
}

impl Default for PersistedConfigs {
    fn default() -> Self {
        Self {
            is_first_launch: true,
            recent_search_keyword: String::new(),
        }
    }
}

/// [`AppConfigs`] backed by a RON file, written atomically. The history is
/// kept as a JSON payload inside the `recent_search_keyword` entry.
pub struct FileAppConfigs {
    path: PathBuf,
    persisted: Mutex<PersistedConfigs>,
    first_launch_tx: watch::Sender<bool>,
    recent_search_tx: watch::Sender<RecentSearch>,
}

impl FileAppConfigs {
    /// Opens the config file under `dir`, substituting defaults when the
    /// file is missing, unreadable, or malformed.
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILENAME);
        let persisted = load_configs(&path);
        let (first_launch_tx, _) = watch::channel(persisted.is_first_launch);
        let (recent_search_tx, _) =
            watch::channel(parse_recent_search(&persisted.recent_search_keyword));
        Self {
            path,
            persisted: Mutex::new(persisted),
            first_launch_tx,
            recent_search_tx,
        }
    }

    fn persist(&self, persisted: &PersistedConfigs) {
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(persisted, pretty) {
            Ok(text) => text,
            Err(err) => {
                app_error!("Failed to serialize app configs: {}", err);
                return;
            }
        };
        if let Err(err) = atomic_write(&self.path, &content) {
            app_error!("Failed to write app configs to {:?}: {}", self.path, err);
        }
    }
}

impl AppConfigs for FileAppConfigs {
    fn is_first_launch(&self) -> watch::Receiver<bool> {
        self.first_launch_tx.subscribe()
    }

    fn recent_search(&self) -> watch::Receiver<RecentSearch> {
        self.recent_search_tx.subscribe()
    }

    fn set_first_launch(&self, first_launch: bool) {
        let snapshot = {
            let mut guard = self.persisted.lock().expect("lock app configs");
            guard.is_first_launch = first_launch;
            guard.clone()
        };
        self.persist(&snapshot);
        self.first_launch_tx.send_replace(first_launch);
    }

    fn update_recent_search(&self, recent_search: &RecentSearch) {
        let payload = match serde_json::to_string(recent_search) {
            Ok(text) => text,
            Err(err) => {
                app_error!("Failed to serialize recent search: {}", err);
                return;
            }
        };
        let snapshot = {
            let mut guard = self.persisted.lock().expect("lock app configs");
            guard.recent_search_keyword = payload;
            guard.clone()
        };
        self.persist(&snapshot);
        self.recent_search_tx.send_replace(recent_search.clone());
    }
}

fn load_configs(path: &Path) -> PersistedConfigs {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return PersistedConfigs::default();
        }
        Err(err) => {
            app_warn!("Failed to read app configs from {:?}: {}", path, err);
            return PersistedConfigs::default();
        }
    };

    match ron::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            app_warn!("Failed to parse app configs from {:?}: {}", path, err);
            PersistedConfigs::default()
        }
    }
}

// Returns an empty history if the payload is malformed, and re-applies the
// dedupe and length bounds in case an older payload exceeded them.
fn parse_recent_search(payload: &str) -> RecentSearch {
    match serde_json::from_str::<RecentSearch>(payload) {
        Ok(parsed) => RecentSearch::from_entries(parsed.entries()),
        Err(_) => RecentSearch::new(),
    }
}
