/// Port for one-way password hashing. The service only ever stores the hash;
/// verification belongs to an authentication layer outside this crate.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain-text password with a fresh salt.
    fn hash(&self, plain: &str) -> anyhow::Result<String>;
}
