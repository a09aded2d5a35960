//! Error types exposed by the fake GitHub server.

use thiserror::Error;

/// Errors surfaced while starting, seeding, or stopping the fake server.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FakeGitHubError {
    /// The listening socket could not be opened.
    #[error("failed to bind fake GitHub server to {address}: {message}")]
    Bind {
        /// Address the server attempted to bind.
        address: String,
        /// Socket error detail.
        message: String,
    },

    /// The server task failed or could not be joined.
    #[error("fake GitHub server failed: {message}")]
    Serve {
        /// Failure detail.
        message: String,
    },

    /// A client pointed at the server could not be built.
    #[error("failed to build GitHub client: {message}")]
    Client {
        /// Client builder error detail.
        message: String,
    },

    /// The seed file could not be read or parsed.
    #[error("failed to load seed file '{path}': {message}")]
    Seed {
        /// Path to the seed file.
        path: String,
        /// Read or parse error detail.
        message: String,
    },

    /// Configuration could not be loaded or was invalid.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
