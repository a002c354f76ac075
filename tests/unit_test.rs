use chrono::Utc;
use uuid::Uuid;

use user_accounts::contract::{error::UserAccountsError, model::*};
use user_accounts::domain::error::DomainError;

fn sample_user() -> User {
    User {
        id: Uuid::new_v4(),
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password_hash: "$argon2id$hash".to_string(),
        phone_number: None,
        address: None,
        avatar: None,
        role: Role::User,
        google_id: None,
        hashed_refresh_token: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_contract_models() {
    let user = sample_user();
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, Role::User);

    let patch = UserPatch {
        email: Some("updated@example.com".to_string()),
        ..Default::default()
    };
    assert_eq!(patch.email, Some("updated@example.com".to_string()));
    assert_eq!(patch.username, None);

    let admin_patch = AdminUserPatch {
        patch,
        role: Some("ADMIN".to_string()),
    };
    assert_eq!(admin_patch.role.as_deref(), Some("ADMIN"));
}

#[test]
fn test_contract_errors() {
    let id = Uuid::new_v4();
    let error = UserAccountsError::not_found(id);
    match error {
        UserAccountsError::NotFound { id: error_id } => assert_eq!(error_id, id),
        _ => panic!("Expected NotFound error"),
    }

    let error = UserAccountsError::conflict("alice@example.com".to_string());
    match error {
        UserAccountsError::Conflict { email } => assert_eq!(email, "alice@example.com"),
        _ => panic!("Expected Conflict error"),
    }

    let error = UserAccountsError::forbidden("no");
    match error {
        UserAccountsError::Forbidden { message } => assert_eq!(message, "no"),
        _ => panic!("Expected Forbidden error"),
    }
}

#[test]
fn test_domain_error_mapping() {
    let id = Uuid::new_v4();

    let mapped: UserAccountsError = DomainError::user_not_found(id).into();
    assert!(matches!(mapped, UserAccountsError::NotFound { .. }));

    let mapped: UserAccountsError =
        DomainError::email_already_exists("a@x.com".to_string()).into();
    assert!(matches!(mapped, UserAccountsError::Conflict { .. }));

    let mapped: UserAccountsError = DomainError::invalid_role("bogus".to_string()).into();
    assert!(matches!(mapped, UserAccountsError::Validation { .. }));

    let mapped: UserAccountsError = DomainError::missing_field("password").into();
    assert!(matches!(mapped, UserAccountsError::Validation { .. }));

    let mapped: UserAccountsError = DomainError::admin_protected(id).into();
    assert!(matches!(mapped, UserAccountsError::Forbidden { .. }));

    // Internal fault detail is never carried across the contract boundary
    let mapped: UserAccountsError = DomainError::database("secret detail").into();
    assert!(matches!(mapped, UserAccountsError::Internal));
}

#[test]
fn test_rest_dto_conversions() {
    use user_accounts::api::rest::dto::*;

    let user = sample_user();
    let dto = UserDto::from(user.clone());
    assert_eq!(dto.id, user.id);
    assert_eq!(dto.username, user.username);
    assert_eq!(dto.role, "USER");

    // The public view serializes without any password material
    let json = serde_json::to_value(&dto).unwrap();
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());

    let create_req = CreateUserReq {
        username: "new".to_string(),
        email: "new@example.com".to_string(),
        password: "pw".to_string(),
        phone_number: None,
        address: None,
        avatar: None,
        role: Some("user".to_string()),
    };
    let new_user = NewUser::from(create_req.clone());
    assert_eq!(new_user.email, create_req.email);
    assert_eq!(new_user.role.as_deref(), Some("user"));

    let update_req = UpdateUserReq {
        id: user.id,
        username: None,
        email: Some("next@example.com".to_string()),
        phone_number: None,
        address: None,
        avatar: None,
    };
    let (id, patch) = update_req.into_parts();
    assert_eq!(id, user.id);
    assert_eq!(patch.email.as_deref(), Some("next@example.com"));
    assert_eq!(patch.username, None);

    let admin_req = UpdateUserAdminReq {
        id: user.id,
        username: Some("boss".to_string()),
        email: None,
        phone_number: None,
        address: None,
        avatar: None,
        role: Some("admin".to_string()),
    };
    let (id, admin_patch) = admin_req.into_parts();
    assert_eq!(id, user.id);
    assert_eq!(admin_patch.patch.username.as_deref(), Some("boss"));
    assert_eq!(admin_patch.role.as_deref(), Some("admin"));
}

#[test]
fn test_user_list_dto_conversion() {
    use user_accounts::api::rest::dto::UserListDto;

    let list = UserList {
        success: true,
        users: vec![sample_user()],
        count: 1,
        message: "Users retrieved successfully".to_string(),
    };

    let dto = UserListDto::from(list);
    assert!(dto.success);
    assert_eq!(dto.count, 1);
    assert_eq!(dto.users.len(), 1);
}
