//! Endpoint handlers for the fake GitHub API.
//!
//! Each handler receives identifiers already extracted from the path, reads
//! or mutates the [`ResourceStore`], and produces an [`ApiResponse`]. List
//! endpoints never answer 404: a missing collection is an empty one.

use serde::de::DeserializeOwned;

use super::models::{IssueComment, LabelsRequest, RepoStatus};
use super::path::{CommitKey, IssueKey};
use super::response::{ApiError, ApiResponse};
use super::store::ResourceStore;

/// Result type shared by every handler.
pub type HandlerResult = Result<ApiResponse, ApiError>;

/// Handler for endpoints addressed by issue or pull request number.
pub type IssueHandler = fn(&ResourceStore, &IssueKey, &[u8]) -> HandlerResult;

/// Handler for endpoints addressed by commit reference.
pub type CommitHandler = fn(&ResourceStore, &CommitKey, &[u8]) -> HandlerResult;

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|error| ApiError::InvalidBody {
        message: error.to_string(),
    })
}

/// `GET /repos/{owner}/{repo}/pulls/{number}`
pub fn get_pull_request(store: &ResourceStore, key: &IssueKey, _body: &[u8]) -> HandlerResult {
    let pull_request = store.pull_request(key).ok_or(ApiError::NotFound)?;
    ApiResponse::ok(&pull_request)
}

/// `GET /repos/{owner}/{repo}/issues/{number}/comments`
pub fn list_comments(store: &ResourceStore, key: &IssueKey, _body: &[u8]) -> HandlerResult {
    ApiResponse::ok(&store.comments(key))
}

/// `POST /repos/{owner}/{repo}/issues/{number}/comments`
pub fn create_comment(store: &ResourceStore, key: &IssueKey, body: &[u8]) -> HandlerResult {
    let comment: IssueComment = parse_body(body)?;
    let response = ApiResponse::created(&comment)?;
    store.add_comment(key, comment);
    Ok(response)
}

/// `GET /repos/{owner}/{repo}/commits/{sha}/status`
pub fn get_combined_status(store: &ResourceStore, key: &CommitKey, _body: &[u8]) -> HandlerResult {
    ApiResponse::ok(&store.combined_status(key))
}

/// `POST /repos/{owner}/{repo}/statuses/{sha}`
pub fn create_status(store: &ResourceStore, key: &CommitKey, body: &[u8]) -> HandlerResult {
    let status: RepoStatus = parse_body(body)?;
    let response = ApiResponse::created(&status)?;
    store.add_status(key, status);
    Ok(response)
}

/// `GET /repos/{owner}/{repo}/issues/{number}/labels`
pub fn list_labels(store: &ResourceStore, key: &IssueKey, _body: &[u8]) -> HandlerResult {
    ApiResponse::ok(&store.labels(key))
}

/// `POST /repos/{owner}/{repo}/issues/{number}/labels`
pub fn add_labels(store: &ResourceStore, key: &IssueKey, body: &[u8]) -> HandlerResult {
    let request: LabelsRequest = parse_body(body)?;
    ApiResponse::ok(&store.add_labels(key, request.into_names()))
}

/// `PUT /repos/{owner}/{repo}/issues/{number}/labels`
pub fn replace_labels(store: &ResourceStore, key: &IssueKey, body: &[u8]) -> HandlerResult {
    let request: LabelsRequest = parse_body(body)?;
    ApiResponse::ok(&store.replace_labels(key, request.into_names()))
}
