//! Ordered route table mapping method and path template to a handler.
//!
//! Routes are tried in order and the first one whose template and method
//! both match wins. A path that has the shape of a known template but
//! carries a non-numeric issue number is rejected with 400 whatever the
//! method, before any handler runs.
//!
//! A route extracts exactly the key its handler takes: issue routes match
//! with [`PathTemplate::match_issue`], commit routes with
//! [`PathTemplate::match_commit`].

use http::Method;

use super::handlers::{self, CommitHandler, HandlerResult, IssueHandler};
use super::path::{PathTemplate, TemplateMatch};
use super::response::ApiError;
use super::store::ResourceStore;

/// Handler bound to a route, typed by the identifiers it needs.
#[derive(Debug, Clone, Copy)]
pub enum Handler {
    /// Needs an issue or pull request key.
    Issue(IssueHandler),
    /// Needs a commit key.
    Commit(CommitHandler),
}

/// One `(method, template) -> handler` entry.
#[derive(Debug, Clone)]
pub struct Route {
    method: Method,
    template: PathTemplate,
    handler: Handler,
}

impl Route {
    fn new(method: Method, template: &str, handler: Handler) -> Self {
        Self {
            method,
            template: PathTemplate::new(template),
            handler,
        }
    }

    /// HTTP method the route answers.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Path template the route answers.
    #[must_use]
    pub const fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// Handler invoked when the route matches.
    #[must_use]
    pub const fn handler(&self) -> Handler {
        self.handler
    }

    /// Runs the handler when both path and method match. A path match with
    /// another method yields `Matched(None)`.
    fn handle(
        &self,
        store: &ResourceStore,
        method: &Method,
        path: &str,
        body: &[u8],
    ) -> TemplateMatch<Option<HandlerResult>> {
        let allowed = self.method == *method;
        match self.handler {
            Handler::Issue(handler) => self
                .template
                .match_issue(path)
                .map(|key| allowed.then(|| handler(store, &key, body))),
            Handler::Commit(handler) => self
                .template
                .match_commit(path)
                .map(|key| allowed.then(|| handler(store, &key, body))),
        }
    }
}

/// Ordered list of routes; first match wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route addressed by issue or pull request number.
    #[must_use]
    pub fn issue_route(mut self, method: Method, template: &str, handler: IssueHandler) -> Self {
        self.routes
            .push(Route::new(method, template, Handler::Issue(handler)));
        self
    }

    /// Appends a route addressed by commit reference.
    #[must_use]
    pub fn commit_route(mut self, method: Method, template: &str, handler: CommitHandler) -> Self {
        self.routes
            .push(Route::new(method, template, Handler::Commit(handler)));
        self
    }

    /// Routes in evaluation order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The GitHub endpoints the fake implements.
    #[must_use]
    pub fn github() -> Self {
        Self::new()
            .issue_route(
                Method::GET,
                "/repos/{owner}/{repo}/pulls/{number}",
                handlers::get_pull_request,
            )
            .issue_route(
                Method::GET,
                "/repos/{owner}/{repo}/issues/{number}/comments",
                handlers::list_comments,
            )
            .issue_route(
                Method::POST,
                "/repos/{owner}/{repo}/issues/{number}/comments",
                handlers::create_comment,
            )
            .commit_route(
                Method::GET,
                "/repos/{owner}/{repo}/commits/{sha}/status",
                handlers::get_combined_status,
            )
            .commit_route(
                Method::POST,
                "/repos/{owner}/{repo}/statuses/{sha}",
                handlers::create_status,
            )
            .issue_route(
                Method::GET,
                "/repos/{owner}/{repo}/issues/{number}/labels",
                handlers::list_labels,
            )
            .issue_route(
                Method::POST,
                "/repos/{owner}/{repo}/issues/{number}/labels",
                handlers::add_labels,
            )
            .issue_route(
                Method::PUT,
                "/repos/{owner}/{repo}/issues/{number}/labels",
                handlers::replace_labels,
            )
    }

    /// Dispatches a request to the first matching route.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MalformedPath`] when the path has a known shape
    /// but an invalid identifier, [`ApiError::NotFound`] when no route
    /// matches, or whatever the selected handler returns.
    pub fn dispatch(
        &self,
        store: &ResourceStore,
        method: &Method,
        path: &str,
        body: &[u8],
    ) -> HandlerResult {
        let mut malformed = None;

        for route in &self.routes {
            match route.handle(store, method, path, body) {
                TemplateMatch::NoMatch | TemplateMatch::Matched(None) => {}
                TemplateMatch::Malformed(error) => {
                    if malformed.is_none() {
                        malformed = Some(error);
                    }
                }
                TemplateMatch::Matched(Some(result)) => return result,
            }
        }

        match malformed {
            Some(error) => Err(ApiError::MalformedPath(error)),
            None => Err(ApiError::NotFound),
        }
    }
}
