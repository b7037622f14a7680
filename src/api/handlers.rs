use axum::{
    Json,
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use super::types::ErrorResponse;
use crate::store::file::FileStore;
use crate::store::types::{NewTodo, StoreError, TodoPatch};

const INDEX_HTML: &str = include_str!("../../public/index.html");
const CLIENT_SCRIPT: &str = include_str!("../../public/scripts.js");

pub async fn handle_list_todos(Extension(store): Extension<Arc<FileStore>>) -> Response {
    match store.list_all().await {
        Ok(todos) => (StatusCode::OK, Json(todos)).into_response(),
        Err(e) => {
            tracing::error!("Failed to list todos: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving todos")
        }
    }
}

pub async fn handle_create_todo(
    Extension(store): Extension<Arc<FileStore>>,
    Json(fields): Json<NewTodo>,
) -> Response {
    match store.create(fields).await {
        Ok(todo) => (StatusCode::CREATED, Json(todo)).into_response(),
        Err(e) => {
            tracing::error!("Failed to create todo: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error creating todo")
        }
    }
}

pub async fn handle_update_todo(
    Extension(store): Extension<Arc<FileStore>>,
    Path(id_str): Path<String>,
    Json(patch): Json<TodoPatch>,
) -> Response {
    let id: u64 = match id_str.parse() {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to parse todo id: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "Invalid todo id");
        }
    };

    match store.update(id, patch).await {
        Ok(todo) => (StatusCode::OK, Json(todo)).into_response(),
        Err(StoreError::NotFound(_)) => error_response(StatusCode::NOT_FOUND, "Todo not found"),
        Err(e) => {
            tracing::error!("Failed to update todo {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error updating todo")
        }
    }
}

pub async fn handle_delete_todo(
    Extension(store): Extension<Arc<FileStore>>,
    Path(id_str): Path<String>,
) -> Response {
    let id: u64 = match id_str.parse() {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to parse todo id: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "Invalid todo id");
        }
    };

    match store.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(StoreError::NotFound(_)) => error_response(StatusCode::NOT_FOUND, "Todo not found"),
        Err(e) => {
            tracing::error!("Failed to delete todo {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error deleting todo")
        }
    }
}

pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn handle_client_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        CLIENT_SCRIPT,
    )
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
        .into_response()
}
