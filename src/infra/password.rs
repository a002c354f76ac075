//! Argon2 implementation of the domain's password hashing port.

use argon2::{
    password_hash::{PasswordHasher as _, SaltString},
    Argon2,
};

use crate::domain::ports::PasswordHasher;

/// Salted one-way hashing with Argon2 default parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plain: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut rand::thread_rng());
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
            .to_string();
        Ok(hash)
    }
}
