use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::User;

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
///
/// The gateway performs no business validation; uniqueness and role checks
/// are the service's responsibility. Lookups return the absence case rather
/// than failing when no row matches, and every write is durable when the
/// call returns.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Load all users.
    async fn list_all(&self) -> anyhow::Result<Vec<User>>;
    /// Load a user by id.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    /// Load a user by email.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    /// Insert a fully-formed domain user.
    ///
    /// Service computes id/timestamps/hash/validation; repo persists.
    async fn insert(&self, u: User) -> anyhow::Result<()>;
    /// Update an existing user (by primary key in `u.id`).
    async fn update(&self, u: User) -> anyhow::Result<()>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    /// Total number of user rows.
    async fn count(&self) -> anyhow::Result<u64>;
}
