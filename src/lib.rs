//! In-process fake of a slice of the GitHub REST API.
//!
//! The crate serves pull request retrieval, issue comments, commit statuses,
//! and issue labels from in-memory state over real HTTP, so code built on a
//! GitHub client library can be tested without network access or an account.
//!
//! ```no_run
//! use fake_github::{FakeGitHub, FakeGitHubServer, PullRequest};
//!
//! # async fn demo() -> Result<(), fake_github::FakeGitHubError> {
//! let github = FakeGitHub::new();
//! let server = FakeGitHubServer::start(&github).await?;
//! github.add_pull_request(PullRequest::new("octo", "repo", 1));
//! let client = server.octocrab()?;
//! # drop(client);
//! server.shutdown().await
//! # }
//! ```

pub mod config;
pub mod github;

pub use config::FakeGitHubConfig;
pub use github::{
    CombinedStatus, FakeGitHub, FakeGitHubError, FakeGitHubServer, IssueComment, Label,
    PullRequest, RepoStatus, Seed, User,
};
