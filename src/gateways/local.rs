use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::UserAccountsApi,
    error::UserAccountsError,
    model::{AdminUserPatch, NewUser, User, UserList, UserPatch},
};
use crate::domain::service::Service;

/// Local implementation of the UserAccountsApi trait that delegates to the
/// domain service
pub struct UserAccountsLocalClient {
    service: Arc<Service>,
}

impl UserAccountsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UserAccountsApi for UserAccountsLocalClient {
    async fn list_users(&self) -> Result<UserList, UserAccountsError> {
        self.service.list_users().await.map_err(Into::into)
    }

    async fn get_user(&self, id: Uuid) -> Result<User, UserAccountsError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UserAccountsError> {
        self.service.create_user(new_user).await.map_err(Into::into)
    }

    async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<User, UserAccountsError> {
        self.service
            .update_user(id, patch)
            .await
            .map_err(Into::into)
    }

    async fn update_user_admin(
        &self,
        id: Uuid,
        patch: AdminUserPatch,
    ) -> Result<User, UserAccountsError> {
        self.service
            .update_user_admin(id, patch)
            .await
            .map_err(Into::into)
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), UserAccountsError> {
        self.service.delete_user(id).await.map_err(Into::into)
    }
}
