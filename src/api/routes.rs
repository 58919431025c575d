//! Router Construction

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use super::handlers::{
    handle_create_user, handle_delete_user, handle_get_user, handle_list_users,
    handle_update_user,
};
use super::protocol::{ENDPOINT_USERS, ENDPOINT_USER_BY_ID};
use crate::store::file::FileStore;

/// Builds the registry router with the store attached as an extension.
pub fn router(store: Arc<FileStore>) -> Router {
    Router::new()
        .route(
            ENDPOINT_USERS,
            get(handle_list_users).post(handle_create_user),
        )
        .route(
            ENDPOINT_USER_BY_ID,
            get(handle_get_user)
                .put(handle_update_user)
                .delete(handle_delete_user),
        )
        .layer(Extension(store))
}
