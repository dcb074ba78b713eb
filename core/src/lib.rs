//! Core of the todo service: the in-memory store and its input rules.
//!
//! # Overview
//! `TodoStore` is the authority for todo records and offers create, list,
//! get, replace and delete. Payloads reach it only as `TodoInput`, which is
//! built either from Rust values or by validating a JSON document against
//! the explicit schema in `schema`.
//!
//! # Design
//! - No I/O and no async runtime; the HTTP boundary lives in `todo-server`.
//! - The store is an owned value, never global. Share it with `Arc`.
//! - Errors split into `ValidationError` (bad input) and `StoreError`
//!   (unknown id). Neither is a server fault.

pub mod error;
pub mod schema;
pub mod store;
pub mod types;

pub use error::{FieldIssue, IssueKind, StoreError, ValidationError};
pub use schema::{FieldKind, FieldSpec, TODO_INPUT_FIELDS};
pub use store::TodoStore;
pub use types::{Todo, TodoId, TodoInput};
