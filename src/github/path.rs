//! URL path parsing and identity wrappers for fake GitHub endpoints.
//!
//! Incoming request paths are matched against endpoint templates such as
//! `/repos/{owner}/{repo}/pulls/{number}`. Placeholders are typed: a
//! `{number}` segment must parse as an unsigned integer, while `{sha}` is any
//! non-empty segment.

use std::fmt;

use thiserror::Error;

/// Errors raised while extracting identifiers from a request path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// A path segment that should identify something was empty.
    #[error("path segment for {placeholder} must not be empty")]
    EmptySegment {
        /// Placeholder name from the endpoint template.
        placeholder: &'static str,
    },

    /// The issue or pull request number is not an integer.
    #[error("issue number must be an unsigned integer, got {segment:?}")]
    InvalidNumber {
        /// Raw segment taken from the URL.
        segment: String,
    },
}

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Wraps an owner login.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] when `value` is empty.
    pub fn new(value: &str) -> Result<Self, PathError> {
        if value.is_empty() {
            return Err(PathError::EmptySegment {
                placeholder: "owner",
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Wraps a repository name.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] when `value` is empty.
    pub fn new(value: &str) -> Result<Self, PathError> {
        if value.is_empty() {
            return Err(PathError::EmptySegment { placeholder: "repo" });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository-scoped number shared by issues and pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssueNumber(u64);

impl IssueNumber {
    /// Wraps an already parsed number.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses a URL segment into an issue number.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidNumber`] when the segment is not an
    /// unsigned integer.
    pub fn parse(segment: &str) -> Result<Self, PathError> {
        segment
            .parse::<u64>()
            .map(Self)
            .map_err(|_| PathError::InvalidNumber {
                segment: segment.to_owned(),
            })
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IssueNumber {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Commit SHA (or any ref GitHub accepts in its place).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitSha(String);

impl CommitSha {
    /// Wraps a commit reference.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] when `value` is empty.
    pub fn new(value: &str) -> Result<Self, PathError> {
        if value.is_empty() {
            return Err(PathError::EmptySegment { placeholder: "sha" });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the reference value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Key for resources that hang off an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueKey {
    /// Repository owner.
    pub owner: RepositoryOwner,
    /// Repository name.
    pub repository: RepositoryName,
    /// Issue or pull request number.
    pub number: IssueNumber,
}

impl IssueKey {
    /// Builds a key from raw parts.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] when `owner` or `repository` is
    /// empty.
    pub fn new(owner: &str, repository: &str, number: u64) -> Result<Self, PathError> {
        Ok(Self {
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repository)?,
            number: IssueNumber::new(number),
        })
    }

    /// Builds a key without validating the owner and repository.
    pub(crate) fn from_parts(owner: &str, repository: &str, number: u64) -> Self {
        Self {
            owner: RepositoryOwner(owner.to_owned()),
            repository: RepositoryName(repository.to_owned()),
            number: IssueNumber::new(number),
        }
    }
}

/// Key for resources that hang off a commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitKey {
    /// Repository owner.
    pub owner: RepositoryOwner,
    /// Repository name.
    pub repository: RepositoryName,
    /// Commit reference.
    pub sha: CommitSha,
}

impl CommitKey {
    /// Builds a key from raw parts.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] when any part is empty.
    pub fn new(owner: &str, repository: &str, sha: &str) -> Result<Self, PathError> {
        Ok(Self {
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repository)?,
            sha: CommitSha::new(sha)?,
        })
    }

    /// Builds a key without validating its parts.
    pub(crate) fn from_parts(owner: &str, repository: &str, sha: &str) -> Self {
        Self {
            owner: RepositoryOwner(owner.to_owned()),
            repository: RepositoryName(repository.to_owned()),
            sha: CommitSha(sha.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Owner,
    Repository,
    Number,
    Sha,
}

impl Segment {
    fn from_template(raw: &str) -> Self {
        match raw {
            "{owner}" => Self::Owner,
            "{repo}" => Self::Repository,
            "{number}" => Self::Number,
            "{sha}" => Self::Sha,
            literal => Self::Literal(literal.to_owned()),
        }
    }
}

/// Outcome of matching a request path against a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateMatch<K> {
    /// The path has a different shape.
    NoMatch,
    /// The path has the template's shape but an identifier is invalid.
    Malformed(PathError),
    /// The path matched and the key was extracted.
    Matched(K),
}

impl<K> TemplateMatch<K> {
    /// Transforms a matched key, passing the other outcomes through.
    #[must_use]
    pub fn map<T>(self, transform: impl FnOnce(K) -> T) -> TemplateMatch<T> {
        match self {
            Self::NoMatch => TemplateMatch::NoMatch,
            Self::Malformed(error) => TemplateMatch::Malformed(error),
            Self::Matched(key) => TemplateMatch::Matched(transform(key)),
        }
    }
}

#[derive(Default)]
struct Captures<'a> {
    owner: Option<&'a str>,
    repository: Option<&'a str>,
    number: Option<&'a str>,
    sha: Option<&'a str>,
}

/// Endpoint path template such as `/repos/{owner}/{repo}/pulls/{number}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses a template. Unknown `{...}` segments are treated as literals.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            segments: split_path(raw).map(Segment::from_template).collect(),
        }
    }

    /// The template as written.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    /// Matches a path and extracts an [`IssueKey`].
    ///
    /// Templates without `{owner}`, `{repo}`, and `{number}` never match.
    #[must_use]
    pub fn match_issue(&self, path: &str) -> TemplateMatch<IssueKey> {
        let Some(captures) = self.capture(path) else {
            return TemplateMatch::NoMatch;
        };
        let (Some(owner), Some(repository), Some(raw_number)) =
            (captures.owner, captures.repository, captures.number)
        else {
            return TemplateMatch::NoMatch;
        };
        match IssueNumber::parse(raw_number) {
            Ok(number) => TemplateMatch::Matched(IssueKey {
                owner: RepositoryOwner(owner.to_owned()),
                repository: RepositoryName(repository.to_owned()),
                number,
            }),
            Err(error) => TemplateMatch::Malformed(error),
        }
    }

    /// Matches a path and extracts a [`CommitKey`].
    ///
    /// Templates without `{owner}`, `{repo}`, and `{sha}` never match.
    #[must_use]
    pub fn match_commit(&self, path: &str) -> TemplateMatch<CommitKey> {
        let Some(captures) = self.capture(path) else {
            return TemplateMatch::NoMatch;
        };
        match (captures.owner, captures.repository, captures.sha) {
            (Some(owner), Some(repository), Some(sha)) => {
                TemplateMatch::Matched(CommitKey::from_parts(owner, repository, sha))
            }
            _ => TemplateMatch::NoMatch,
        }
    }

    /// Walks the template against `path`; placeholders never capture an
    /// empty segment.
    fn capture<'p>(&self, path: &'p str) -> Option<Captures<'p>> {
        let mut captures = Captures::default();
        let mut request_segments = split_path(path);

        for segment in &self.segments {
            let value = request_segments.next()?;
            match segment {
                Segment::Literal(literal) if literal == value => {}
                Segment::Literal(_) => return None,
                _ if value.is_empty() => return None,
                Segment::Owner => captures.owner = Some(value),
                Segment::Repository => captures.repository = Some(value),
                Segment::Number => captures.number = Some(value),
                Segment::Sha => captures.sha = Some(value),
            }
        }

        request_segments.next().is_none().then_some(captures)
    }
}

/// Splits a path into segments, ignoring leading and trailing slashes.
fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.trim_matches('/').split('/')
}
