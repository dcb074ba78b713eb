//! Error types for the todo store and its input validation.
//!
//! # Design
//! Two client-facing failures exist and they never mix: a payload that does
//! not satisfy the input schema (`ValidationError`) and a reference to a todo
//! that is not in the store (`StoreError::NotFound`). Neither is a server
//! fault. `ValidationError` carries one `FieldIssue` per offending field so
//! the boundary can report all of them at once.

use std::fmt;

use thiserror::Error;

use crate::types::TodoId;

/// Category of a single validation problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// A required field was absent.
    Missing,
    /// A field was present with the wrong JSON type.
    WrongType,
    /// A text field that must be non-empty was empty.
    Empty,
    /// The request body was not a JSON object, or not JSON at all.
    MalformedBody,
    /// A path identifier was not a valid UUID.
    MalformedId,
    /// A query parameter was not a non-negative integer.
    MalformedInteger,
    /// The query string as a whole could not be decoded.
    MalformedQuery,
}

impl IssueKind {
    /// Stable machine-readable tag used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Missing => "missing",
            IssueKind::WrongType => "type_error",
            IssueKind::Empty => "string_too_short",
            IssueKind::MalformedBody => "json_invalid",
            IssueKind::MalformedId => "uuid_parsing",
            IssueKind::MalformedInteger => "int_parsing",
            IssueKind::MalformedQuery => "query_invalid",
        }
    }
}

/// One offending input location, e.g. `["body", "title"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    location: Vec<String>,
    kind: IssueKind,
    message: String,
}

impl FieldIssue {
    pub fn new(location: Vec<String>, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            location,
            kind,
            message: message.into(),
        }
    }

    /// Issue with a field of the JSON request body.
    pub fn body(field: &str, kind: IssueKind, message: impl Into<String>) -> Self {
        Self::new(vec!["body".to_string(), field.to_string()], kind, message)
    }

    /// Issue with the request body as a whole.
    pub fn body_root(kind: IssueKind, message: impl Into<String>) -> Self {
        Self::new(vec!["body".to_string()], kind, message)
    }

    /// Issue with a path parameter.
    pub fn path(param: &str, kind: IssueKind, message: impl Into<String>) -> Self {
        Self::new(vec!["path".to_string(), param.to_string()], kind, message)
    }

    /// Issue with a query parameter.
    pub fn query(param: &str, kind: IssueKind, message: impl Into<String>) -> Self {
        Self::new(vec!["query".to_string(), param.to_string()], kind, message)
    }

    /// Issue with the query string as a whole.
    pub fn query_root(kind: IssueKind, message: impl Into<String>) -> Self {
        Self::new(vec!["query".to_string()], kind, message)
    }

    pub fn location(&self) -> &[String] {
        &self.location
    }

    /// Name of the offending field, if the issue is not about the whole body.
    pub fn field(&self) -> Option<&str> {
        self.location.get(1).map(String::as_str)
    }

    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location.join("."), self.message)
    }
}

/// Input failed required-field, type or non-empty constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", render_issues(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Build from collected issues. Callers only construct this when at
    /// least one issue exists.
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    pub fn single(issue: FieldIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// True if any issue refers to `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field() == Some(field))
    }
}

fn render_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors returned by `TodoStore` operations that reference an id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No todo with this id is in the store.
    #[error("todo not found: {0}")]
    NotFound(TodoId),
}
