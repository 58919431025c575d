//! HTTP Request Handlers
//!
//! Maps each verb+path of the REST surface to one store call and translates
//! store errors into status codes: `MissingFields` becomes 400, `NotFound`
//! becomes 404, storage failures become 500. The message strings are part of
//! the API contract.

use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::protocol::{ErrorResponse, MessageResponse, UserMessageResponse};
use crate::store::file::FileStore;
use crate::store::types::{StoreError, UserDraft};

const MSG_MISSING_FIELDS: &str = "Name, email, and age are required.";
const MSG_NOT_FOUND: &str = "User not found";
const MSG_SERVER_FAULT: &str = "Internal server error";

pub async fn handle_list_users(Extension(store): Extension<Arc<FileStore>>) -> Response {
    match store.list().await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_get_user(
    Extension(store): Extension<Arc<FileStore>>,
    Path(id): Path<String>,
) -> Response {
    let index = match parse_index(&id) {
        Some(index) => index,
        None => return error_response(StoreError::NotFound),
    };

    match store.get(index).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_create_user(
    Extension(store): Extension<Arc<FileStore>>,
    Json(draft): Json<UserDraft>,
) -> Response {
    match store.create(draft).await {
        Ok((index, user)) => {
            tracing::debug!("Created user at index {}", index);
            (
                StatusCode::CREATED,
                Json(UserMessageResponse {
                    message: "User added successfully!".to_string(),
                    user,
                }),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn handle_update_user(
    Extension(store): Extension<Arc<FileStore>>,
    Path(id): Path<String>,
    Json(draft): Json<UserDraft>,
) -> Response {
    let index = match parse_index(&id) {
        Some(index) => index,
        None => return error_response(StoreError::NotFound),
    };

    match store.update(index, draft).await {
        Ok(user) => {
            tracing::debug!("Updated user at index {}", index);
            (
                StatusCode::OK,
                Json(UserMessageResponse {
                    message: "User updated successfully!".to_string(),
                    user,
                }),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn handle_delete_user(
    Extension(store): Extension<Arc<FileStore>>,
    Path(id): Path<String>,
) -> Response {
    let index = match parse_index(&id) {
        Some(index) => index,
        None => return error_response(StoreError::NotFound),
    };

    match store.delete(index).await {
        Ok(()) => {
            tracing::debug!("Deleted user at index {}", index);
            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "User deleted successfully".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

// Non-numeric and negative ids address nothing in the sequence.
fn parse_index(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok()
}

fn error_response(err: StoreError) -> Response {
    match err {
        StoreError::MissingFields => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: MSG_MISSING_FIELDS.to_string(),
            }),
        )
            .into_response(),
        StoreError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: MSG_NOT_FOUND.to_string(),
            }),
        )
            .into_response(),
        StoreError::UnreadableData(_) | StoreError::Encode(_) | StoreError::Io(_) => {
            tracing::error!("Storage failure: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: MSG_SERVER_FAULT.to_string(),
                }),
            )
                .into_response()
        }
    }
}
