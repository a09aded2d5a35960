//! Standalone fake GitHub API server.
//!
//! Serves the fake on the configured address until interrupted, writing the
//! base URL to stdout so scripts can point a client at it.

use std::io::{self, Write};
use std::process::ExitCode;

use fake_github::{FakeGitHub, FakeGitHubConfig, FakeGitHubError, FakeGitHubServer, Seed};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<(), FakeGitHubError> {
    let config = load_config()?;
    let address = config.bind_address()?;

    let github = FakeGitHub::new();
    if let Some(path) = config.seed_path() {
        let seed = Seed::read(&path)?;
        tracing::info!(path = %path, pull_requests = seed.pull_requests.len(), "seeding fake");
        seed.apply(&github);
    }

    let server = FakeGitHubServer::bind(&github, address).await?;
    writeln!(io::stdout().lock(), "{}", server.uri()).map_err(|error| FakeGitHubError::Io {
        message: error.to_string(),
    })?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|error| FakeGitHubError::Io {
            message: format!("failed to wait for Ctrl-C: {error}"),
        })?;

    server.shutdown().await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FakeGitHubError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<FakeGitHubConfig, FakeGitHubError> {
    FakeGitHubConfig::load().map_err(|error| FakeGitHubError::Configuration {
        message: error.to_string(),
    })
}
