//! Mapping from core errors to HTTP responses.
//!
//! Validation and not-found are client errors: they are logged at debug and
//! never as server faults. Body rejections that are not about the payload's
//! content (size limit, unreadable body) keep axum's own status.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use todo_core::{FieldIssue, StoreError, TodoId, ValidationError};
use tracing::debug;

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 422: request path, query or body failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 404: the referenced todo does not exist.
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    /// The body could not be read at all, e.g. it exceeded the size limit.
    #[error(transparent)]
    Rejected(JsonRejection),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

#[derive(Serialize)]
struct IssueBody<'a> {
    loc: &'a [String],
    msg: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl<'a> From<&'a FieldIssue> for IssueBody<'a> {
    fn from(issue: &'a FieldIssue) -> Self {
        Self {
            loc: issue.location(),
            msg: issue.message(),
            kind: issue.kind().as_str(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<T: Serialize> {
    detail: T,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                debug!(error = %err, "rejected request");
                let detail: Vec<IssueBody<'_>> = err.issues().iter().map(IssueBody::from).collect();
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorBody { detail })).into_response()
            }
            ApiError::NotFound(id) => {
                debug!(id = %id, "todo not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorBody {
                        detail: "Todo not found",
                    }),
                )
                    .into_response()
            }
            ApiError::Rejected(rejection) => {
                debug!(error = %rejection, "unreadable request body");
                rejection.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use todo_core::IssueKind;

    use super::*;

    #[test]
    fn store_not_found_keeps_the_id() {
        let id = TodoId::new();
        let err = ApiError::from(StoreError::NotFound(id));
        assert!(matches!(err, ApiError::NotFound(found) if found == id));
        assert!(err.to_string().contains(&id.to_string()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_422() {
        let err = ApiError::from(ValidationError::single(FieldIssue::body(
            "title",
            IssueKind::Missing,
            "Field required",
        )));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn issue_body_uses_wire_names() {
        let issue = FieldIssue::body("completed", IssueKind::WrongType, "Input should be a valid boolean");
        let json = serde_json::to_value(IssueBody::from(&issue)).unwrap();
        assert_eq!(json["loc"], serde_json::json!(["body", "completed"]));
        assert_eq!(json["msg"], "Input should be a valid boolean");
        assert_eq!(json["type"], "type_error");
    }
}
