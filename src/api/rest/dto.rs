use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::model::{AdminUserPatch, NewUser, User, UserList, UserPatch};

/// Public-safe user representation. The password hash and token columns are
/// never serialized; the role is stringified.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub role: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// REST DTO for the list response with its success flag
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UserListDto {
    pub success: bool,
    pub users: Vec<UserDto>,
    pub count: u64,
    pub message: String,
}

/// REST DTO for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateUserReq {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
}

/// REST DTO for the self-service update; the target id travels in the body
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateUserReq {
    pub id: Uuid,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
}

/// REST DTO for the admin update: the self-service fields plus a role string
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateUserAdminReq {
    pub id: Uuid,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
}

// Conversion implementations between REST DTOs and contract models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            phone_number: user.phone_number,
            address: user.address,
            role: user.role.to_string(),
            avatar: user.avatar,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<UserList> for UserListDto {
    fn from(list: UserList) -> Self {
        Self {
            success: list.success,
            users: list.users.into_iter().map(UserDto::from).collect(),
            count: list.count,
            message: list.message,
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            phone_number: req.phone_number,
            address: req.address,
            avatar: req.avatar,
            role: req.role,
        }
    }
}

impl UpdateUserReq {
    pub fn into_parts(self) -> (Uuid, UserPatch) {
        (
            self.id,
            UserPatch {
                username: self.username,
                email: self.email,
                phone_number: self.phone_number,
                address: self.address,
                avatar: self.avatar,
            },
        )
    }
}

impl UpdateUserAdminReq {
    pub fn into_parts(self) -> (Uuid, AdminUserPatch) {
        (
            self.id,
            AdminUserPatch {
                patch: UserPatch {
                    username: self.username,
                    email: self.email,
                    phone_number: self.phone_number,
                    address: self.address,
                    avatar: self.avatar,
                },
                role: self.role,
            },
        )
    }
}
