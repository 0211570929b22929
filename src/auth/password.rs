use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed")]
    Hash,
    #[error("Password verification failed")]
    Verify,
}

pub fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
    bcrypt::hash(password, cost).map_err(|_| PasswordError::Hash)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    bcrypt::verify(password, hash).map_err(|_| PasswordError::Verify)
}

/// Reads the cost factor out of a modular-crypt bcrypt hash
/// (`$2y$14$...` — the second field is the version, the third the cost).
pub fn hash_cost(hash: &str) -> Option<u32> {
    let mut parts = hash.split('$');

    if !parts.next()?.is_empty() {
        return None;
    }

    if !matches!(parts.next()?, "2a" | "2b" | "2x" | "2y") {
        return None;
    }

    parts.next()?.parse().ok()
}

/// A hash whose encoded cost differs from `cost` has to be regenerated.
/// An unparseable hash also reports `true`.
pub fn needs_rehash(hash: &str, cost: u32) -> bool {
    hash_cost(hash).map_or(true, |encoded| encoded != cost)
}
