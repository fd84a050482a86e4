//! HTTP server implementation for the read-only web API.
//!
//! This module provides the axum-based server exposing contributor and task
//! listings as JSON. Response bodies are objects keyed by a human-readable
//! label wrapping an array of rows, matching the CLI's table columns.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::db::Database;
use crate::error::{ErrorCode, StoreError};
use crate::types::{SortField, Task};

/// API server state shared across handlers.
#[derive(Clone)]
pub struct ApiServer {
    /// Reference to the task database.
    db: Arc<Database>,
}

impl ApiServer {
    /// Create a new API server instance.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get the database reference.
    pub fn db(&self) -> &Arc<Database> {
        &self.db
    }
}

/// Error wrapper mapping store error codes to HTTP status codes.
#[derive(Debug)]
pub struct ApiError(pub StoreError);

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError(StoreError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.code {
            ErrorCode::ContributorNotFound | ErrorCode::TaskNotFound => StatusCode::NOT_FOUND,
            code if code.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0 }))).into_response()
    }
}

/// Full task row including the owner, as served by the task listings.
fn task_row(task: &Task) -> Value {
    json!([
        task.num,
        task.owner,
        task.name,
        task.description,
        task.priority,
        task.start,
        task.due,
        task.finished,
        task.deleted,
    ])
}

/// Task row without the owner, as served inside a contributor profile.
fn owned_task_row(task: &Task) -> Value {
    json!([
        task.num,
        task.name,
        task.description,
        task.priority,
        task.start,
        task.due,
        task.finished,
        task.deleted,
    ])
}

/// `GET /contributors` -- all contributors with their status.
pub async fn list_contributors(
    State(state): State<ApiServer>,
) -> Result<Json<Value>, ApiError> {
    let contributors = state.db().list_contributors()?;
    let rows: Vec<Value> = contributors
        .iter()
        .map(|c| json!([c.name, c.role, c.status()]))
        .collect();
    Ok(Json(json!({ "Contributors": rows })))
}

/// `GET /contributors/{name}` -- one contributor's profile plus owned tasks.
pub async fn contributor_profile(
    State(state): State<ApiServer>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let contributor = state
        .db()
        .get_contributor(&name)?
        .ok_or_else(|| ApiError(StoreError::contributor_not_found(&name)))?;

    let tasks = state.db().tasks_for_owner(&name)?;
    let task_rows: Vec<Value> = tasks.iter().map(owned_task_row).collect();

    Ok(Json(json!({
        "Contributor": [[contributor.name, contributor.role, contributor.status()]],
        "Tasks": task_rows,
    })))
}

/// `GET /tasks` -- all tasks ordered by num.
pub async fn list_all_tasks(State(state): State<ApiServer>) -> Result<Json<Value>, ApiError> {
    let tasks = state.db().list_tasks(SortField::Num)?;
    let rows: Vec<Value> = tasks.iter().map(task_row).collect();
    Ok(Json(json!({ "Tasks": rows })))
}

/// `GET /tasks/sort/{field}` -- all tasks ordered by the given field.
/// Unknown fields fall back to num ordering.
pub async fn list_tasks_sorted(
    State(state): State<ApiServer>,
    Path(field): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let sort = SortField::parse_or_default(Some(&field));
    let tasks = state.db().list_tasks(sort)?;
    let rows: Vec<Value> = tasks.iter().map(task_row).collect();
    let label = format!("Tasks Sorted On {}", sort.as_str());
    let mut body = serde_json::Map::new();
    body.insert(label, Value::Array(rows));
    Ok(Json(Value::Object(body)))
}

/// `GET /health` -- liveness check.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Build the router with all routes.
pub fn build_router(state: ApiServer) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/contributors", get(list_contributors))
        .route("/contributors/{name}", get(contributor_profile))
        .route("/tasks", get(list_all_tasks))
        .route("/tasks/sort/{field}", get(list_tasks_sorted))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve until ctrl-c.
pub async fn serve(db: Arc<Database>, port: u16) -> anyhow::Result<()> {
    let state = ApiServer::new(db);
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    info!("API server listening on http://{}", bound_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("API server shutting down");
        })
        .await?;

    Ok(())
}
