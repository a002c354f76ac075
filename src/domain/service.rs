use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{AdminUserPatch, NewUser, Role, User, UserList, UserPatch};
use crate::domain::error::DomainError;
use crate::domain::ports::PasswordHasher;
use crate::domain::repo::UsersRepository;

/// Domain service with business rules for user account management.
/// Depends only on the repository and hasher ports, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    hasher: Arc<dyn PasswordHasher>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_username_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_username_length: 64,
        }
    }
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        hasher: Arc<dyn PasswordHasher>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            hasher,
            config,
        }
    }

    /// List all users with a count.
    ///
    /// An empty store is reported as an unsuccessful `UserList` with a
    /// message instead of an error; callers that want a hard failure on
    /// emptiness have to check the flag themselves.
    #[instrument(name = "user_accounts.service.list_users", skip(self))]
    pub async fn list_users(&self) -> Result<UserList, DomainError> {
        debug!("Listing users");

        let users = self
            .repo
            .list_all()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        if users.is_empty() {
            return Ok(UserList {
                success: false,
                users: Vec::new(),
                count: 0,
                message: "No users found".to_string(),
            });
        }

        // Count the rows actually returned; a separate count query could
        // disagree with them under concurrent writes.
        let count = users.len() as u64;

        debug!("Successfully listed {} users", count);
        Ok(UserList {
            success: true,
            users,
            count,
            message: "Users retrieved successfully".to_string(),
        })
    }

    #[instrument(name = "user_accounts.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        debug!("Getting user by id");

        let user = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))?;
        debug!("Successfully retrieved user");
        Ok(user)
    }

    #[instrument(
        name = "user_accounts.service.create_user",
        skip(self, new_user),
        fields(email = %new_user.email, username = %new_user.username)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        // Validate input before touching the store
        self.validate_new_user(&new_user)?;
        let role = parse_role(new_user.role.as_deref())?.unwrap_or_default();

        // Check uniqueness
        if self
            .repo
            .find_by_email(&new_user.email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .is_some()
        {
            return Err(DomainError::email_already_exists(new_user.email));
        }

        let password_hash = self
            .hasher
            .hash(&new_user.password)
            .map_err(|e| DomainError::password_hash(e.to_string()))?;

        // Id and both timestamps are assigned here, at creation time
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            email: new_user.email,
            password_hash,
            phone_number: new_user.phone_number,
            address: new_user.address,
            avatar: new_user.avatar,
            role,
            google_id: None,
            hashed_refresh_token: None,
            created_at: now,
            updated_at: now,
        };

        self.repo
            .insert(user.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    /// Self-service update: sparse-patch merge, no role changes.
    #[instrument(
        name = "user_accounts.service.update_user",
        skip(self, patch),
        fields(user_id = %id)
    )]
    pub async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        info!("Updating user");

        self.validate_user_patch(&patch)?;
        let current = self.merge_patch(id, patch).await?;

        self.repo
            .update(current.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully updated user");
        Ok(current)
    }

    /// Admin update: same merge semantics as the self-service path, plus an
    /// optional role change. An email conflict fails the call just like the
    /// self-service path does.
    #[instrument(
        name = "user_accounts.service.update_user_admin",
        skip(self, admin_patch),
        fields(user_id = %id)
    )]
    pub async fn update_user_admin(
        &self,
        id: Uuid,
        admin_patch: AdminUserPatch,
    ) -> Result<User, DomainError> {
        info!("Updating user (admin)");

        // The role must parse before anything is merged or persisted
        let role = parse_role(admin_patch.role.as_deref())?;
        self.validate_user_patch(&admin_patch.patch)?;

        let mut current = self.merge_patch(id, admin_patch.patch).await?;
        if let Some(role) = role {
            current.role = role;
        }

        self.repo
            .update(current.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully updated user (admin)");
        Ok(current)
    }

    #[instrument(
        name = "user_accounts.service.delete_user",
        skip(self),
        fields(user_id = %id)
    )]
    pub async fn delete_user(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting user");

        let user = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        // Admin accounts are never removable through this operation
        if user.role == Role::Admin {
            return Err(DomainError::admin_protected(id));
        }

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        if !deleted {
            return Err(DomainError::user_not_found(id));
        }

        info!("Successfully deleted user");
        Ok(())
    }

    // --- merge / validation helpers ---

    /// Load the current record, enforce email uniqueness against other users
    /// and apply the sparse patch in memory. Does not persist.
    async fn merge_patch(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        let mut current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        // A new email may only collide with the user's own record
        if let Some(ref new_email) = patch.email {
            if let Some(existing) = self
                .repo
                .find_by_email(new_email)
                .await
                .map_err(|e| DomainError::database(e.to_string()))?
            {
                if existing.id != current.id {
                    return Err(DomainError::email_already_exists(new_email.clone()));
                }
            }
        }

        // Sparse-patch merge: only supplied fields replace stored values
        if let Some(username) = patch.username {
            current.username = username;
        }
        if let Some(email) = patch.email {
            current.email = email;
        }
        if let Some(phone_number) = patch.phone_number {
            current.phone_number = Some(phone_number);
        }
        if let Some(address) = patch.address {
            current.address = Some(address);
        }
        if let Some(avatar) = patch.avatar {
            current.avatar = Some(avatar);
        }
        current.updated_at = Utc::now();

        Ok(current)
    }

    fn validate_new_user(&self, new_user: &NewUser) -> Result<(), DomainError> {
        if new_user.username.trim().is_empty() {
            return Err(DomainError::missing_field("username"));
        }
        if new_user.email.trim().is_empty() {
            return Err(DomainError::missing_field("email"));
        }
        if new_user.password.trim().is_empty() {
            return Err(DomainError::missing_field("password"));
        }
        self.validate_username(&new_user.username)?;
        self.validate_email(&new_user.email)?;
        Ok(())
    }

    fn validate_user_patch(&self, patch: &UserPatch) -> Result<(), DomainError> {
        if let Some(ref username) = patch.username {
            if username.trim().is_empty() {
                return Err(DomainError::validation("username", "cannot be blank"));
            }
            self.validate_username(username)?;
        }
        if let Some(ref email) = patch.email {
            if email.trim().is_empty() {
                return Err(DomainError::validation("email", "cannot be blank"));
            }
            self.validate_email(email)?;
        }
        Ok(())
    }

    fn validate_email(&self, email: &str) -> Result<(), DomainError> {
        if !email.contains('@') || !email.contains('.') {
            return Err(DomainError::invalid_email(email.to_string()));
        }
        Ok(())
    }

    fn validate_username(&self, username: &str) -> Result<(), DomainError> {
        if username.len() > self.config.max_username_length {
            return Err(DomainError::username_too_long(
                username.len(),
                self.config.max_username_length,
            ));
        }
        Ok(())
    }
}

/// Parse an optional role string against the closed role set. Blank input
/// counts as absent, anything unrecognized is rejected.
fn parse_role(raw: Option<&str>) -> Result<Option<Role>, DomainError> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => Role::parse(value)
            .map(Some)
            .ok_or_else(|| DomainError::invalid_role(value.to_string())),
    }
}
