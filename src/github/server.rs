//! HTTP server exposing a [`FakeGitHub`] on a loopback port.
//!
//! The server lives as long as its [`FakeGitHubServer`] handle. Calling
//! [`FakeGitHubServer::shutdown`] stops it gracefully; dropping the handle
//! stops it unconditionally and releases the port.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use http::{Method, Uri};
use octocrab::Octocrab;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use super::FakeGitHub;
use super::error::FakeGitHubError;
use super::response::{ApiError, ApiResponse};
use super::router::RouteTable;
use super::store::ResourceStore;

#[derive(Clone)]
struct ServerState {
    store: Arc<ResourceStore>,
    routes: Arc<RouteTable>,
}

async fn dispatch(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path();
    let response = state
        .routes
        .dispatch(&state.store, &method, path, &body)
        .unwrap_or_else(|error| {
            if let ApiError::MalformedPath(detail) = &error {
                tracing::warn!(%method, path, "rejecting request: {detail}");
            }
            ApiResponse::from(error)
        });

    tracing::debug!(%method, path, status = %response.status, "handled request");
    response.into_response()
}

fn build_router(store: Arc<ResourceStore>, routes: RouteTable) -> Router {
    let state = ServerState {
        store,
        routes: Arc::new(routes),
    };
    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Running fake GitHub server.
#[derive(Debug)]
pub struct FakeGitHubServer {
    address: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl FakeGitHubServer {
    /// Serves `github` on an ephemeral loopback port.
    ///
    /// # Errors
    ///
    /// Returns [`FakeGitHubError::Bind`] when no port can be opened.
    pub async fn start(github: &FakeGitHub) -> Result<Self, FakeGitHubError> {
        Self::bind(github, SocketAddr::from((Ipv4Addr::LOCALHOST, 0))).await
    }

    /// Serves `github` on `address`.
    ///
    /// # Errors
    ///
    /// Returns [`FakeGitHubError::Bind`] when the address cannot be bound.
    pub async fn bind(github: &FakeGitHub, address: SocketAddr) -> Result<Self, FakeGitHubError> {
        let bind_error = |error: std::io::Error| FakeGitHubError::Bind {
            address: address.to_string(),
            message: error.to_string(),
        };
        let listener = TcpListener::bind(address).await.map_err(bind_error)?;
        let local_address = listener.local_addr().map_err(bind_error)?;

        let app = build_router(github.store(), RouteTable::github());
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let outcome = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_rx.await.ok();
                })
                .await;
            if let Err(error) = outcome {
                tracing::warn!("fake GitHub server stopped with error: {error}");
            }
        });

        tracing::info!(address = %local_address, "fake GitHub server listening");
        Ok(Self {
            address: local_address,
            shutdown: Some(shutdown_tx),
            task: Some(task),
        })
    }

    /// Address the server is bound to.
    #[must_use]
    pub const fn address(&self) -> SocketAddr {
        self.address
    }

    /// Base URL for API requests, e.g. `http://127.0.0.1:49152`.
    #[must_use]
    pub fn uri(&self) -> String {
        format!("http://{}", self.address)
    }

    /// Builds an Octocrab client whose base URI points at this server.
    ///
    /// # Errors
    ///
    /// Returns [`FakeGitHubError::Client`] when the base URI cannot be parsed
    /// or Octocrab fails to construct a client.
    pub fn octocrab(&self) -> Result<Octocrab, FakeGitHubError> {
        let client_error = |message: String| FakeGitHubError::Client { message };
        let base_uri: Uri = self
            .uri()
            .parse::<Uri>()
            .map_err(|error| client_error(error.to_string()))?;

        Octocrab::builder()
            .base_uri(base_uri)
            .map_err(|error| client_error(format!("invalid base URI: {error}")))?
            .build()
            .map_err(|error| client_error(error.to_string()))
    }

    /// Stops accepting connections and waits for in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns [`FakeGitHubError::Serve`] when the server task panicked.
    pub async fn shutdown(mut self) -> Result<(), FakeGitHubError> {
        self.signal_shutdown();
        if let Some(task) = self.task.take() {
            task.await.map_err(|error| FakeGitHubError::Serve {
                message: error.to_string(),
            })?;
        }
        tracing::info!(address = %self.address, "fake GitHub server stopped");
        Ok(())
    }

    fn signal_shutdown(&mut self) {
        if let Some(sender) = self.shutdown.take() {
            sender.send(()).ok();
        }
    }
}

impl Drop for FakeGitHubServer {
    fn drop(&mut self) {
        self.signal_shutdown();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
