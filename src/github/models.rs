//! Wire types for the GitHub resources the fake serves.
//!
//! Each type names only the fields the fake needs or clients commonly read.
//! Everything else is captured in a flattened `extra` map so payloads come
//! back out exactly as they went in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::path::IssueKey;

/// GitHub account reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account login.
    pub login: String,
    /// Remaining fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Creates a user with only a login.
    #[must_use]
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            extra: Map::new(),
        }
    }
}

/// Repository a pull request merges into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name without owner.
    pub name: String,
    /// Owning account.
    pub owner: User,
    /// Remaining fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Base side of a pull request; the only branch the fake looks into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestBase {
    /// Repository the pull request targets.
    pub repo: Repository,
    /// Remaining fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Pull request payload.
///
/// Only `number` and `base.repo` are read, to key the stored entry. Every
/// other field (`head`, `title`, `user`, and so on) is opaque and returned
/// exactly as it was given, explicit `null`s included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Repository-scoped number.
    pub number: u64,
    /// Branch merged into; identifies the owning repository.
    pub base: PullRequestBase,
    /// Remaining fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PullRequest {
    /// Creates a minimal pull request whose base lives in `owner/repository`.
    #[must_use]
    pub fn new(owner: &str, repository: &str, number: u64) -> Self {
        Self {
            number,
            base: PullRequestBase {
                repo: Repository {
                    name: repository.to_owned(),
                    owner: User::new(owner),
                    extra: Map::new(),
                },
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    /// Sets an opaque top-level field such as `title` or `head`.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    /// Title text, when present as a string.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(Value::as_str)
    }

    /// Key under which the pull request is stored.
    ///
    /// An empty owner or repository name still yields a key; such a pull
    /// request is simply unreachable over HTTP.
    #[must_use]
    pub fn key(&self) -> IssueKey {
        IssueKey::from_parts(
            &self.base.repo.owner.login,
            &self.base.repo.name,
            self.number,
        )
    }
}

/// Comment on an issue or pull request conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueComment {
    /// Comment identifier, when the client supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Comment body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Creation time, as the client wrote it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Remaining fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IssueComment {
    /// Creates a comment with only a body.
    #[must_use]
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }
}

/// Status posted against a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStatus {
    /// One of `error`, `failure`, `pending`, or `success`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Link shown next to the status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Label distinguishing this status from other systems.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Remaining fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Aggregate of every status posted for a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedStatus {
    /// Number of statuses.
    pub total_count: usize,
    /// Statuses in the order they were posted.
    pub statuses: Vec<RepoStatus>,
}

/// Label attached to an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,
}

impl Label {
    /// Creates a label from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Body accepted by the add and replace label endpoints.
///
/// GitHub takes either a bare array of names or an object with a `labels`
/// array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LabelsRequest {
    /// `["bug", "triage"]`
    Names(Vec<String>),
    /// `{"labels": ["bug", "triage"]}`
    Wrapped {
        /// Label names.
        labels: Vec<String>,
    },
}

impl LabelsRequest {
    /// Consumes the request, yielding label names in request order.
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        match self {
            Self::Names(labels) | Self::Wrapped { labels } => labels,
        }
    }
}
