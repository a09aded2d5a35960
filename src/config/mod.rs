//! Configuration for the standalone fake server, loaded from CLI,
//! environment, and files.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – `127.0.0.1`, an ephemeral port, no seed file
//! 2. **Configuration file** – `.fake-github.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `FAKE_GITHUB_HOST`, `FAKE_GITHUB_PORT`,
//!    `FAKE_GITHUB_SEED_FILE`
//! 4. **Command-line arguments** – `--host`/`-H`, `--port`/`-p`,
//!    `--seed-file`/`-s`
//!
//! # Configuration File
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8080
//! seed_file = "fixtures/github.json"
//! ```

use std::net::{IpAddr, SocketAddr};

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::FakeGitHubError;

const DEFAULT_HOST: &str = "127.0.0.1";

/// Settings for the `fake-github` binary.
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "FAKE_GITHUB",
    discovery(
        dotfile_name = ".fake-github.toml",
        config_file_name = "fake-github.toml",
        app_name = "fake-github"
    )
)]
pub struct FakeGitHubConfig {
    /// Interface to listen on.
    ///
    /// Can be provided via:
    /// - CLI: `--host <ADDR>` or `-H <ADDR>`
    /// - Environment: `FAKE_GITHUB_HOST`
    /// - Config file: `host = "..."`
    #[ortho_config(cli_short = 'H')]
    pub host: String,

    /// Port to listen on; `0` picks a free port.
    ///
    /// Can be provided via:
    /// - CLI: `--port <PORT>` or `-p <PORT>`
    /// - Environment: `FAKE_GITHUB_PORT`
    /// - Config file: `port = 8080`
    #[ortho_config(cli_short = 'p')]
    pub port: u16,

    /// JSON file with resources to serve from the start.
    ///
    /// Can be provided via:
    /// - CLI: `--seed-file <PATH>` or `-s <PATH>`
    /// - Environment: `FAKE_GITHUB_SEED_FILE`
    /// - Config file: `seed_file = "..."`
    #[ortho_config(cli_short = 's')]
    pub seed_file: Option<String>,
}

impl Default for FakeGitHubConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: 0,
            seed_file: None,
        }
    }
}

impl FakeGitHubConfig {
    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    ///
    /// Returns [`FakeGitHubError::Configuration`] when `host` is not an IP
    /// address.
    pub fn bind_address(&self) -> Result<SocketAddr, FakeGitHubError> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|error| FakeGitHubError::Configuration {
                message: format!("host '{}' is not an IP address: {error}", self.host),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Seed file path, if one is configured.
    #[must_use]
    pub fn seed_path(&self) -> Option<Utf8PathBuf> {
        self.seed_file.as_deref().map(Utf8PathBuf::from)
    }
}

#[cfg(test)]
mod tests;
