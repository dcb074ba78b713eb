//! Extractors that turn raw request parts into validated core values.
//!
//! Malformed ids, query parameters and bodies surface as 422 with the
//! offending location. A body that cannot be read at all (too large, broken
//! stream) is passed through as axum rejected it.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use todo_core::{FieldIssue, IssueKind, TodoId, TodoInput, ValidationError};

use crate::error::ApiError;

/// Page size used when the `limit` query parameter is omitted.
pub const DEFAULT_LIMIT: usize = 100;

/// Create/replace body validated against the todo input schema.
#[derive(Debug)]
pub struct TodoPayload(pub TodoInput);

impl<S> FromRequest<S> for TodoPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(payload_rejection)?;
        Ok(TodoPayload(TodoInput::from_json(&value)?))
    }
}

/// Bad content becomes a 422 body issue; a body that could not be read at
/// all keeps axum's status (413 for the size limit).
fn payload_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::MissingJsonContentType(_) => ValidationError::single(FieldIssue::body_root(
            IssueKind::MalformedBody,
            rejection.body_text(),
        ))
        .into(),
        other => ApiError::Rejected(other),
    }
}

/// The `{todo_id}` path segment parsed as a `TodoId`.
#[derive(Debug, Clone, Copy)]
pub struct TodoPath(pub TodoId);

fn malformed_id() -> ApiError {
    ValidationError::single(FieldIssue::path(
        "todo_id",
        IssueKind::MalformedId,
        "Input should be a valid UUID",
    ))
    .into()
}

impl<S> FromRequestParts<S> for TodoPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| malformed_id())?;
        raw.parse().map(TodoPath).map_err(|_| malformed_id())
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawPagination {
    skip: Option<String>,
    limit: Option<String>,
}

/// `skip`/`limit` query parameters, defaulting to 0 and `DEFAULT_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_param(name: &str, raw: Option<&str>, default: usize) -> Result<usize, FieldIssue> {
    match raw {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            FieldIssue::query(
                name,
                IssueKind::MalformedInteger,
                "Input should be a valid non-negative integer",
            )
        }),
    }
}

impl Pagination {
    fn from_raw(raw: &RawPagination) -> Result<Self, ValidationError> {
        let skip = parse_param("skip", raw.skip.as_deref(), 0);
        let limit = parse_param("limit", raw.limit.as_deref(), DEFAULT_LIMIT);
        match (skip, limit) {
            (Ok(skip), Ok(limit)) => Ok(Self { skip, limit }),
            (skip, limit) => Err(ValidationError::new(
                [skip.err(), limit.err()].into_iter().flatten().collect(),
            )),
        }
    }
}

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPagination>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ValidationError::single(FieldIssue::query_root(
                    IssueKind::MalformedQuery,
                    rejection.body_text(),
                ))
            })?;
        Ok(Pagination::from_raw(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(skip: Option<&str>, limit: Option<&str>) -> RawPagination {
        RawPagination {
            skip: skip.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn pagination_defaults() {
        assert_eq!(Pagination::from_raw(&RawPagination::default()).unwrap(), Pagination::default());
        assert_eq!(Pagination::default().limit, DEFAULT_LIMIT);
    }

    #[test]
    fn pagination_parses_both() {
        let page = Pagination::from_raw(&raw(Some("1"), Some("2"))).unwrap();
        assert_eq!(page, Pagination { skip: 1, limit: 2 });
    }

    #[test]
    fn pagination_rejects_negative_and_text() {
        let err = Pagination::from_raw(&raw(Some("-1"), Some("lots"))).unwrap_err();
        assert!(err.mentions("skip"));
        assert!(err.mentions("limit"));
    }

    #[test]
    fn pagination_reports_only_the_bad_param() {
        let err = Pagination::from_raw(&raw(Some("3"), Some("x"))).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert!(err.mentions("limit"));
    }
}
