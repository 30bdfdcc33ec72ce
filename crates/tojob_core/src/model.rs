use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Upper bound on the recent-search history length.
pub const MAX_SEARCH_HISTORY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub logo_url: String,
}

/// A single listing returned by the remote jobs service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
}

/// A container of [`Job`]s produced by one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobList {
    jobs: Vec<Job>,
}

impl JobList {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Number of distinct companies across the listed jobs.
    ///
    /// Jobs without a company are not counted; distinctness is structural.
    pub fn company_count(&self) -> usize {
        self.jobs
            .iter()
            .filter_map(|job| job.company.as_ref())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Bounded, deduplicated, most-recent-first history of past query strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecentSearch {
    search_history: Vec<String>,
}

impl RecentSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from raw entries, applying the same dedupe and
    /// length rules as [`RecentSearch::record`]. Used when restoring a
    /// persisted payload that may predate the current bounds.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut recent = Self::new();
        for entry in entries {
            recent.record_back(entry.as_ref());
        }
        recent
    }

    pub fn entries(&self) -> &[String] {
        &self.search_history
    }

    pub fn is_empty(&self) -> bool {
        self.search_history.is_empty()
    }

    /// Records a query at the front of the history.
    ///
    /// A prior occurrence of the same query is moved rather than duplicated,
    /// and the history is truncated to [`MAX_SEARCH_HISTORY`]. Blank queries
    /// are not recorded. Returns whether the query was recorded.
    pub fn record(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        self.search_history.retain(|entry| entry != query);
        self.search_history.insert(0, query.to_string());
        self.search_history.truncate(MAX_SEARCH_HISTORY);
        true
    }

    // Append-at-back variant for rebuilding from a most-recent-first payload.
    fn record_back(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() || self.search_history.iter().any(|entry| entry == query) {
            return;
        }
        if self.search_history.len() < MAX_SEARCH_HISTORY {
            self.search_history.push(query.to_string());
        }
    }
}

/// A user-visible error with a stable identity for dismissal tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub id: u64,
    pub message: String,
}
