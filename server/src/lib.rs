//! HTTP boundary for the todo store.
//!
//! # Design
//! Handlers are thin: extractors validate the path, query and body into core
//! values, the handler makes one `TodoStore` call, and `ApiError` maps the
//! outcome to a status code. The store is injected as router state so tests
//! and the binary each own an independent instance.

pub mod config;
pub mod error;
pub mod extract;

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use todo_core::{Todo, TodoStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

pub use config::ServerConfig;
pub use error::ApiError;
pub use extract::{Pagination, TodoPath, TodoPayload, DEFAULT_LIMIT};

pub type SharedStore = Arc<TodoStore>;

pub fn app(store: SharedStore) -> Router {
    let collection = get(list_todos).post(create_todo);
    Router::new()
        .route("/", get(read_root))
        .route("/todos", collection.clone())
        .route("/todos/", collection)
        .route(
            "/todos/{todo_id}",
            get(get_todo).put(replace_todo).delete(delete_todo),
        )
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::very_permissive())
        .with_state(store)
}

/// Serve `store` on `listener` until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, store: SharedStore, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed = ?started.elapsed(),
        "handled request"
    );
    response
}

async fn read_root() -> Json<Value> {
    Json(json!({ "message": "Todo API에 오신 것을 환영합니다!" }))
}

async fn list_todos(State(store): State<SharedStore>, page: Pagination) -> Json<Vec<Todo>> {
    Json(store.list(page.skip, page.limit))
}

async fn create_todo(
    State(store): State<SharedStore>,
    TodoPayload(input): TodoPayload,
) -> (StatusCode, Json<Todo>) {
    (StatusCode::CREATED, Json(store.create(input)))
}

async fn get_todo(
    State(store): State<SharedStore>,
    TodoPath(id): TodoPath,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(store.get(&id)?))
}

async fn replace_todo(
    State(store): State<SharedStore>,
    TodoPath(id): TodoPath,
    TodoPayload(input): TodoPayload,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(store.replace(&id, input)?))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    TodoPath(id): TodoPath,
) -> Result<StatusCode, ApiError> {
    store.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
