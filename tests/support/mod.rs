//! Shared fixture starting a fake GitHub server with a client pointed at it.

use fake_github::{FakeGitHub, FakeGitHubError, FakeGitHubServer};
use http::StatusCode;
use octocrab::Octocrab;

pub const OWNER: &str = "tektoncd";
pub const REPO: &str = "test";
pub const PR_NUMBER: u64 = 1;

/// Fake state, its running server, and a client for that server.
///
/// Dropping the fixture stops the server.
pub struct FakeGitHubFixture {
    pub github: FakeGitHub,
    pub server: FakeGitHubServer,
    pub client: Octocrab,
}

/// Starts a fresh fake for one test.
///
/// # Errors
///
/// Returns an error if the server cannot bind or the client cannot be built.
pub async fn start() -> Result<FakeGitHubFixture, FakeGitHubError> {
    let github = FakeGitHub::new();
    let server = FakeGitHubServer::start(&github).await?;
    let client = server.octocrab()?;
    Ok(FakeGitHubFixture {
        github,
        server,
        client,
    })
}

/// HTTP status carried by an Octocrab error, if GitHub answered at all.
pub fn status_of(error: &octocrab::Error) -> Option<StatusCode> {
    match error {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code),
        _ => None,
    }
}

/// `/repos/{OWNER}/{REPO}/...` path for the shared test repository.
pub fn repo_path(suffix: &str) -> String {
    format!("/repos/{OWNER}/{REPO}/{suffix}")
}
