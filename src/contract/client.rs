use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::UserAccountsError,
    model::{AdminUserPatch, NewUser, User, UserList, UserPatch},
};

/// Public API trait for the user accounts service that callers can use
#[async_trait]
pub trait UserAccountsApi: Send + Sync {
    /// List all users. An empty store yields a soft unsuccessful `UserList`,
    /// not an error.
    async fn list_users(&self) -> Result<UserList, UserAccountsError>;

    /// Get a user by ID
    async fn get_user(&self, id: Uuid) -> Result<User, UserAccountsError>;

    /// Create a new user
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserAccountsError>;

    /// Update a user with partial data (self-service; no role changes)
    async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<User, UserAccountsError>;

    /// Update a user with partial data plus an optional role change
    async fn update_user_admin(
        &self,
        id: Uuid,
        patch: AdminUserPatch,
    ) -> Result<User, UserAccountsError>;

    /// Delete a user by ID. Admin users are refused.
    async fn delete_user(&self, id: Uuid) -> Result<(), UserAccountsError>;
}
