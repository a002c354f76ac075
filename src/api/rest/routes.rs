use std::sync::Arc;

use axum::{
    routing::{get, put},
    Extension, Router,
};

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Assemble the REST surface for the user accounts service.
///
/// The self-service and admin updates both carry the target id in the
/// request body, so they hang off the collection path rather than `{id}`.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/api/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .put(handlers::update_user),
        )
        .route("/api/users/admin", put(handlers::update_user_admin))
        .route(
            "/api/users/{id}",
            get(handlers::get_user).delete(handlers::delete_user),
        )
        .layer(Extension(service))
}
