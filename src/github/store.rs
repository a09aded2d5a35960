//! In-memory state behind the fake GitHub API.
//!
//! Pull requests, issue comments, commit statuses, and labels are held in
//! independent collections. Sub-resources are not tied to an existing pull
//! request: GitHub treats them as separate resources and so does the fake.
//! A single mutex covers every collection, so each operation is atomic.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::models::{CombinedStatus, IssueComment, Label, PullRequest, RepoStatus};
use super::path::{CommitKey, IssueKey};

#[derive(Debug, Default)]
struct Resources {
    pull_requests: HashMap<IssueKey, PullRequest>,
    comments: HashMap<IssueKey, Vec<IssueComment>>,
    statuses: HashMap<CommitKey, Vec<RepoStatus>>,
    labels: HashMap<IssueKey, Vec<Label>>,
}

/// Authoritative state for every resource kind the fake serves.
#[derive(Debug, Default)]
pub struct ResourceStore {
    resources: Mutex<Resources>,
}

impl ResourceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // State is plain data, so a panic elsewhere cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, Resources> {
        self.resources
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts the pull request, replacing any previous one with the same key.
    pub fn add_pull_request(&self, pull_request: PullRequest) {
        let key = pull_request.key();
        self.lock().pull_requests.insert(key, pull_request);
    }

    /// Looks up a pull request.
    #[must_use]
    pub fn pull_request(&self, key: &IssueKey) -> Option<PullRequest> {
        self.lock().pull_requests.get(key).cloned()
    }

    /// Appends a comment to the issue's conversation.
    pub fn add_comment(&self, key: &IssueKey, comment: IssueComment) {
        self.lock()
            .comments
            .entry(key.clone())
            .or_default()
            .push(comment);
    }

    /// Comments on the issue in the order they were added.
    #[must_use]
    pub fn comments(&self, key: &IssueKey) -> Vec<IssueComment> {
        self.lock().comments.get(key).cloned().unwrap_or_default()
    }

    /// Appends a status to the commit.
    pub fn add_status(&self, key: &CommitKey, status: RepoStatus) {
        self.lock()
            .statuses
            .entry(key.clone())
            .or_default()
            .push(status);
    }

    /// Every status posted for the commit, with its count.
    #[must_use]
    pub fn combined_status(&self, key: &CommitKey) -> CombinedStatus {
        let statuses = self.lock().statuses.get(key).cloned().unwrap_or_default();
        CombinedStatus {
            total_count: statuses.len(),
            statuses,
        }
    }

    /// Unions `names` into the issue's labels, keeping first-seen order.
    ///
    /// Returns the resulting label list.
    pub fn add_labels<I, S>(&self, key: &IssueKey, names: I) -> Vec<Label>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut resources = self.lock();
        let labels = resources.labels.entry(key.clone()).or_default();
        for name in names {
            push_unique(labels, name.into());
        }
        labels.clone()
    }

    /// Discards the issue's labels and installs `names` in the given order.
    ///
    /// Duplicate names in `names` collapse to their first occurrence.
    /// Returns the resulting label list.
    pub fn replace_labels<I, S>(&self, key: &IssueKey, names: I) -> Vec<Label>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut replacement = Vec::new();
        for name in names {
            push_unique(&mut replacement, name.into());
        }
        self.lock()
            .labels
            .insert(key.clone(), replacement.clone());
        replacement
    }

    /// Labels on the issue in insertion order.
    #[must_use]
    pub fn labels(&self, key: &IssueKey) -> Vec<Label> {
        self.lock().labels.get(key).cloned().unwrap_or_default()
    }
}

fn push_unique(labels: &mut Vec<Label>, name: String) {
    if !labels.iter().any(|label| label.name == name) {
        labels.push(Label::new(name));
    }
}
