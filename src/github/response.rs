//! HTTP responses produced by the fake's handlers.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use super::path::PathError;

/// Documentation link GitHub attaches to error bodies.
pub const DOCUMENTATION_URL: &str = "https://docs.github.com/rest";

/// Status code and JSON body for a handled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body.
    pub body: Value,
}

impl ApiResponse {
    /// Serialises `body` with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] when `body` cannot be converted to
    /// JSON.
    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|error| ApiError::Serialization {
            message: error.to_string(),
        })?;
        Ok(Self {
            status,
            body: value,
        })
    }

    /// `200 OK` with `body`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] when `body` cannot be converted to
    /// JSON.
    pub fn ok<T: Serialize>(body: &T) -> Result<Self, ApiError> {
        Self::json(StatusCode::OK, body)
    }

    /// `201 Created` with `body`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] when `body` cannot be converted to
    /// JSON.
    pub fn created<T: Serialize>(body: &T) -> Result<Self, ApiError> {
        Self::json(StatusCode::CREATED, body)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Failures surfaced to HTTP clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No route or no resource for the request.
    #[error("not found")]
    NotFound,

    /// An identifier in the path could not be parsed.
    #[error("malformed path: {0}")]
    MalformedPath(#[from] PathError),

    /// The request body was not valid JSON for the endpoint.
    #[error("problems parsing JSON: {message}")]
    InvalidBody {
        /// Parser error detail.
        message: String,
    },

    /// A stored resource could not be serialised.
    #[error("failed to serialise response: {message}")]
    Serialization {
        /// Serialiser error detail.
        message: String,
    },
}

impl ApiError {
    /// Status code GitHub would answer with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MalformedPath(_) | Self::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            Self::Serialization { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "Not Found",
            Self::MalformedPath(_) => "Bad Request",
            Self::InvalidBody { .. } => "Problems parsing JSON",
            Self::Serialization { .. } => "Server Error",
        }
    }
}

impl From<ApiError> for ApiResponse {
    fn from(error: ApiError) -> Self {
        Self {
            status: error.status(),
            body: json!({
                "message": error.message(),
                "documentation_url": DOCUMENTATION_URL,
            }),
        }
    }
}
