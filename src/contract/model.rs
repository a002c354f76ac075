use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Closed set of account roles. Input text is matched case-insensitively
/// against the variant names; anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Case-insensitive lookup against the role set.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("user") {
            Some(Self::User)
        } else if value.eq_ignore_ascii_case("admin") {
            Some(Self::Admin)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure user model for inter-layer communication (no serde)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub role: Role,
    pub google_id: Option<String>,
    pub hashed_refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new user. The password arrives in plain text and is
/// hashed by the service before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
}

/// Partial update data for a user. Absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
}

/// Admin update: everything a self-service patch carries, plus a role string
/// that must parse against the role set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminUserPatch {
    pub patch: UserPatch,
    pub role: Option<String>,
}

/// Batch listing result. An empty store yields `success: false` with a
/// message rather than an error; this soft-result shape is part of the
/// listing contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserList {
    pub success: bool,
    pub users: Vec<User>,
    pub count: u64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("AdMiN"), Some(Role::Admin));
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse(" USER "), Some(Role::User));
        assert_eq!(Role::parse("bogus"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_defaults_to_user() {
        assert_eq!(Role::default(), Role::User);
        assert_eq!(Role::User.as_str(), "USER");
        assert_eq!(Role::Admin.to_string(), "ADMIN");
    }
}
