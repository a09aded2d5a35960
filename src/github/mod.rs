//! In-process fake of the GitHub REST API.
//!
//! [`FakeGitHub`] owns the resource state; [`FakeGitHubServer`] exposes it
//! over HTTP so an unmodified GitHub client can talk to it. Tests keep a
//! clone of the [`FakeGitHub`] handle to install fixtures and inspect what
//! the client wrote.

pub mod error;
pub mod handlers;
pub mod models;
pub mod path;
pub mod response;
pub mod router;
pub mod seed;
pub mod server;
pub mod store;

use std::sync::Arc;

pub use error::FakeGitHubError;
pub use models::{CombinedStatus, IssueComment, Label, PullRequest, RepoStatus, User};
pub use path::{CommitKey, IssueKey, PathError};
pub use router::RouteTable;
pub use seed::Seed;
pub use server::FakeGitHubServer;
pub use store::ResourceStore;

/// Shared handle to one fake's state.
///
/// Clones share the same store. Each test builds its own instance, so state
/// never leaks between tests.
#[derive(Debug, Clone, Default)]
pub struct FakeGitHub {
    store: Arc<ResourceStore>,
}

impl FakeGitHub {
    /// Creates a fake with no resources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn store(&self) -> Arc<ResourceStore> {
        Arc::clone(&self.store)
    }

    /// Inserts the pull request under `base.repo.owner.login`,
    /// `base.repo.name`, and `number`, replacing any previous one.
    pub fn add_pull_request(&self, pull_request: PullRequest) {
        self.store.add_pull_request(pull_request);
    }

    /// Looks up a pull request.
    #[must_use]
    pub fn pull_request(&self, owner: &str, repo: &str, number: u64) -> Option<PullRequest> {
        self.store
            .pull_request(&IssueKey::from_parts(owner, repo, number))
    }

    /// Appends a comment to an issue or pull request conversation.
    pub fn add_comment(&self, owner: &str, repo: &str, number: u64, comment: IssueComment) {
        self.store
            .add_comment(&IssueKey::from_parts(owner, repo, number), comment);
    }

    /// Comments in the order they were added.
    #[must_use]
    pub fn comments(&self, owner: &str, repo: &str, number: u64) -> Vec<IssueComment> {
        self.store
            .comments(&IssueKey::from_parts(owner, repo, number))
    }

    /// Appends a status to a commit.
    pub fn add_status(&self, owner: &str, repo: &str, sha: &str, status: RepoStatus) {
        self.store
            .add_status(&CommitKey::from_parts(owner, repo, sha), status);
    }

    /// Every status posted for a commit, with its count.
    #[must_use]
    pub fn combined_status(&self, owner: &str, repo: &str, sha: &str) -> CombinedStatus {
        self.store
            .combined_status(&CommitKey::from_parts(owner, repo, sha))
    }

    /// Unions `names` into the issue's labels; returns the resulting list.
    pub fn add_labels<I, S>(&self, owner: &str, repo: &str, number: u64, names: I) -> Vec<Label>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.store
            .add_labels(&IssueKey::from_parts(owner, repo, number), names)
    }

    /// Replaces the issue's labels; returns the resulting list.
    pub fn replace_labels<I, S>(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        names: I,
    ) -> Vec<Label>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.store
            .replace_labels(&IssueKey::from_parts(owner, repo, number), names)
    }

    /// Labels on the issue in insertion order.
    #[must_use]
    pub fn labels(&self, owner: &str, repo: &str, number: u64) -> Vec<Label> {
        self.store.labels(&IssueKey::from_parts(owner, repo, number))
    }
}

#[cfg(test)]
mod tests;
