use axum::{extract::Path, http::StatusCode, response::Json, Extension};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::rest::dto::{
    CreateUserReq, UpdateUserAdminReq, UpdateUserReq, UserDto, UserListDto,
};
use crate::domain::service::Service;

/// List all users. An empty store still answers 200 with the soft
/// unsuccessful payload.
pub async fn list_users(
    Extension(svc): Extension<std::sync::Arc<Service>>,
) -> Result<Json<UserListDto>, StatusCode> {
    info!("Listing users");

    match svc.list_users().await {
        Ok(list) => Ok(Json(UserListDto::from(list))),
        Err(e) => {
            error!("Failed to list users: {}", e);
            Err(map_domain_error_to_status_code(&e))
        }
    }
}

/// Get a specific user by ID
pub async fn get_user(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserDto>, StatusCode> {
    info!("Getting user with id: {}", id);

    match svc.get_user(id).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to get user {}: {}", id, e);
            Err(map_domain_error_to_status_code(&e))
        }
    }
}

/// Create a new user
pub async fn create_user(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(req): Json<CreateUserReq>,
) -> Result<(StatusCode, Json<UserDto>), StatusCode> {
    info!("Creating user with email: {}", req.email);

    match svc.create_user(req.into()).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(UserDto::from(user)))),
        Err(e) => {
            error!("Failed to create user: {}", e);
            Err(map_domain_error_to_status_code(&e))
        }
    }
}

/// Update an existing user (self-service, no role changes)
pub async fn update_user(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(req): Json<UpdateUserReq>,
) -> Result<Json<UserDto>, StatusCode> {
    let (id, patch) = req.into_parts();
    info!("Updating user {}", id);

    match svc.update_user(id, patch).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to update user {}: {}", id, e);
            Err(map_domain_error_to_status_code(&e))
        }
    }
}

/// Update an existing user with an optional role change
pub async fn update_user_admin(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(req): Json<UpdateUserAdminReq>,
) -> Result<Json<UserDto>, StatusCode> {
    let (id, patch) = req.into_parts();
    info!("Updating user {} (admin)", id);

    match svc.update_user_admin(id, patch).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to update user {} (admin): {}", id, e);
            Err(map_domain_error_to_status_code(&e))
        }
    }
}

/// Delete a user by ID
pub async fn delete_user(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    info!("Deleting user: {}", id);

    match svc.delete_user(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete user {}: {}", id, e);
            Err(map_domain_error_to_status_code(&e))
        }
    }
}

/// Map domain errors to HTTP status codes. Email conflicts and the
/// admin-delete refusal both answer 400, matching the documented surface.
fn map_domain_error_to_status_code(error: &crate::domain::error::DomainError) -> StatusCode {
    use crate::domain::error::DomainError;

    match error {
        DomainError::UserNotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::EmailAlreadyExists { .. }
        | DomainError::InvalidEmail { .. }
        | DomainError::InvalidRole { .. }
        | DomainError::MissingField { .. }
        | DomainError::UsernameTooLong { .. }
        | DomainError::Validation { .. }
        | DomainError::AdminProtected { .. } => StatusCode::BAD_REQUEST,
        DomainError::PasswordHash { .. } | DomainError::Database { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
