//! Loading initial fake state from a JSON seed file.
//!
//! ```json
//! { "pull_requests": [ { "number": 1, "base": { "repo": { "name": "repo", "owner": { "login": "octo" } } } } ] }
//! ```

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;

use super::FakeGitHub;
use super::error::FakeGitHubError;
use super::models::PullRequest;

/// Resources to install before the server starts answering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Seed {
    /// Pull requests to serve.
    pub pull_requests: Vec<PullRequest>,
}

impl Seed {
    /// Parses a seed document.
    ///
    /// # Errors
    ///
    /// Returns [`FakeGitHubError::Seed`] when `content` is not a valid seed.
    pub fn from_json(path: &Utf8Path, content: &str) -> Result<Self, FakeGitHubError> {
        serde_json::from_str(content).map_err(|error| FakeGitHubError::Seed {
            path: path.to_string(),
            message: error.to_string(),
        })
    }

    /// Reads and parses a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`FakeGitHubError::Seed`] when the file cannot be read or
    /// parsed.
    pub fn read(path: &Utf8Path) -> Result<Self, FakeGitHubError> {
        let seed_error = |message: String| FakeGitHubError::Seed {
            path: path.to_string(),
            message,
        };
        let parent = match path.parent() {
            Some(dir) if !dir.as_str().is_empty() => dir,
            _ => Utf8Path::new("."),
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| seed_error("path has no file name".to_owned()))?;

        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|error| seed_error(format!("failed to open '{parent}': {error}")))?;
        let content = dir
            .read_to_string(file_name)
            .map_err(|error| seed_error(error.to_string()))?;

        Self::from_json(path, &content)
    }

    /// Installs every seeded resource into `github`.
    pub fn apply(self, github: &FakeGitHub) {
        for pull_request in self.pull_requests {
            github.add_pull_request(pull_request);
        }
    }
}
