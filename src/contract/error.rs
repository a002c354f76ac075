use thiserror::Error;
use uuid::Uuid;

/// Errors that are safe to expose to callers of the contract API
#[derive(Error, Debug, Clone)]
pub enum UserAccountsError {
    #[error("User not found: {id}")]
    NotFound { id: Uuid },

    #[error("User with email '{email}' already exists")]
    Conflict { email: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Internal error")]
    Internal,
}

impl UserAccountsError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn conflict(email: String) -> Self {
        Self::Conflict { email }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for UserAccountsError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            UserNotFound { id } => Self::not_found(id),
            EmailAlreadyExists { email } => Self::conflict(email),
            InvalidEmail { email } => Self::validation(format!("Invalid email: {}", email)),
            InvalidRole { value } => Self::validation(format!("Invalid role: '{}'", value)),
            MissingField { field } => Self::validation(format!("{} is required", field)),
            UsernameTooLong { len, max } => Self::validation(format!(
                "Username too long: {} characters (max: {})",
                len, max
            )),
            Validation { field, message } => Self::validation(format!("{}: {}", field, message)),
            AdminProtected { id } => {
                Self::forbidden(format!("Cannot delete admin user: {}", id))
            }
            PasswordHash { .. } | Database { .. } => Self::internal(),
        }
    }
}
