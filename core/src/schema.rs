//! Explicit input schema for todo payloads.
//!
//! # Design
//! Wire payloads arrive as untyped JSON. Rather than relying on a derived
//! deserializer that stops at the first problem, the accepted shape is
//! written down as data (`TODO_INPUT_FIELDS`) and every field is checked
//! against it, so a rejected payload reports all offending fields together.
//! Unknown fields are ignored.

use serde_json::{Map, Value};

use crate::error::{FieldIssue, IssueKind, ValidationError};
use crate::types::TodoInput;

/// JSON type accepted for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty string.
    Text,
    /// String or `null`.
    NullableText,
    Boolean,
}

/// One entry of an input schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Value applied when an optional field is omitted, as JSON text.
    pub default: Option<&'static str>,
}

/// Schema shared by create and replace.
pub const TODO_INPUT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        kind: FieldKind::Text,
        required: true,
        default: None,
    },
    FieldSpec {
        name: "description",
        kind: FieldKind::NullableText,
        required: false,
        default: Some("null"),
    },
    FieldSpec {
        name: "completed",
        kind: FieldKind::Boolean,
        required: false,
        default: Some("false"),
    },
];

/// Check one field of `object` against `spec`.
fn check_field(spec: &FieldSpec, object: &Map<String, Value>) -> Result<(), FieldIssue> {
    let Some(value) = object.get(spec.name) else {
        if spec.required {
            return Err(FieldIssue::body(spec.name, IssueKind::Missing, "Field required"));
        }
        return Ok(());
    };

    match (spec.kind, value) {
        (FieldKind::Text, Value::String(s)) if s.is_empty() => Err(FieldIssue::body(
            spec.name,
            IssueKind::Empty,
            "String should have at least 1 character",
        )),
        (FieldKind::Text, Value::String(_)) => Ok(()),
        (FieldKind::NullableText, Value::String(_) | Value::Null) => Ok(()),
        (FieldKind::Boolean, Value::Bool(_)) => Ok(()),
        (FieldKind::Text | FieldKind::NullableText, _) => Err(FieldIssue::body(
            spec.name,
            IssueKind::WrongType,
            "Input should be a valid string",
        )),
        (FieldKind::Boolean, _) => Err(FieldIssue::body(
            spec.name,
            IssueKind::WrongType,
            "Input should be a valid boolean",
        )),
    }
}

/// Validate `value` against `fields`, collecting every issue.
pub fn validate_object<'a>(
    fields: &[FieldSpec],
    value: &'a Value,
) -> Result<&'a Map<String, Value>, ValidationError> {
    let Value::Object(object) = value else {
        return Err(ValidationError::single(FieldIssue::body_root(
            IssueKind::MalformedBody,
            "Input should be a valid dictionary",
        )));
    };

    let issues: Vec<FieldIssue> = fields
        .iter()
        .filter_map(|spec| check_field(spec, object).err())
        .collect();

    if issues.is_empty() {
        Ok(object)
    } else {
        Err(ValidationError::new(issues))
    }
}

impl TodoInput {
    /// Validate a JSON document against `TODO_INPUT_FIELDS` and build an
    /// input with defaults applied for omitted optional fields.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let object = validate_object(TODO_INPUT_FIELDS, value)?;

        let title = object
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let description = object
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string);
        let completed = object
            .get("completed")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        TodoInput::new(title, description, completed)
    }
}
