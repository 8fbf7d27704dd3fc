//! Route handlers
//!
//! One handler per route; each is a direct passthrough to the store.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::model::{Todo, User};
use crate::store::Store;

use super::ApiError;

/// Build the API router over a shared store
pub fn router(store: Arc<Store>) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(show_user))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", get(show_todo))
        .with_state(store)
}

async fn list_users(State(store): State<Arc<Store>>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(store.resolve::<User>().await?))
}

async fn show_user(
    State(store): State<Arc<Store>>,
    Path(id): Path<u64>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(store.resolve_one::<User>(id).await?))
}

async fn create_user(
    State(store): State<Arc<Store>>,
    Json(candidate): Json<User>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let created = store.create(candidate).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_todos(State(store): State<Arc<Store>>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(store.resolve::<Todo>().await?))
}

async fn show_todo(
    State(store): State<Arc<Store>>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(store.resolve_one::<Todo>(id).await?))
}

async fn create_todo(
    State(store): State<Arc<Store>>,
    Json(candidate): Json<Todo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let created = store.create(candidate).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
