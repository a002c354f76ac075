use sea_orm::Set;

use crate::contract::model::{Role, User};
use crate::infra::storage::entity::{ActiveModel, Model, Role as RoleColumn};

impl From<RoleColumn> for Role {
    fn from(role: RoleColumn) -> Self {
        match role {
            RoleColumn::User => Role::User,
            RoleColumn::Admin => Role::Admin,
        }
    }
}

impl From<Role> for RoleColumn {
    fn from(role: Role) -> Self {
        match role {
            Role::User => RoleColumn::User,
            Role::Admin => RoleColumn::Admin,
        }
    }
}

/// Convert a database row to a contract model
impl From<Model> for User {
    fn from(entity: Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            phone_number: entity.phone_number,
            address: entity.address,
            avatar: entity.avatar,
            role: entity.role.into(),
            google_id: entity.google_id,
            hashed_refresh_token: entity.hashed_refresh_token,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Build an active model with every column set, for insert or update-by-PK
pub fn to_active_model(user: User) -> ActiveModel {
    ActiveModel {
        id: Set(user.id),
        username: Set(user.username),
        email: Set(user.email),
        password_hash: Set(user.password_hash),
        phone_number: Set(user.phone_number),
        address: Set(user.address),
        avatar: Set(user.avatar),
        role: Set(user.role.into()),
        google_id: Set(user.google_id),
        hashed_refresh_token: Set(user.hashed_refresh_token),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
    }
}
