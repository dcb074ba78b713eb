//! Domain types for the todo service.
//!
//! # Design
//! `Todo` is the stored record and doubles as the wire representation; the
//! server serializes it directly. `TodoInput` is the validated payload for
//! create and replace. Its fields are private and every constructor checks
//! the title, so the store never sees an invalid record.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FieldIssue, IssueKind, ValidationError};

/// Identifier of a stored todo. Rendered as a hyphenated lowercase UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generate a fresh random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TodoId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single todo item as held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for creating or replacing a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoInput {
    title: String,
    description: Option<String>,
    completed: bool,
}

impl TodoInput {
    /// Build an input, rejecting an empty title.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        completed: bool,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::single(FieldIssue::body(
                "title",
                IssueKind::Empty,
                "String should have at least 1 character",
            )));
        }
        Ok(Self {
            title,
            description,
            completed,
        })
    }

    /// Shorthand for a title-only input with the schema defaults applied.
    pub fn titled(title: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(title, None, false)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn into_parts(self) -> (String, Option<String>, bool) {
        (self.title, self.description, self.completed)
    }
}
