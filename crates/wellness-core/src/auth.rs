//! Password hashing and verification.
//!
//! Uses PBKDF2-HMAC-SHA-256 with a random per-user salt, stored in PHC string
//! format. The hash string is self-describing, so parameters can be raised
//! later without invalidating existing records.

use pbkdf2::password_hash::rand_core::OsRng;
use pbkdf2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::Pbkdf2;
use thiserror::Error;

/// Errors from password hashing.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The key-derivation function failed.
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Hash a password with a freshly generated salt.
///
/// Returns the full PHC string (`$pbkdf2-sha256$...`) for storage.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Pbkdf2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC string.
///
/// An unparseable stored hash verifies as false rather than erroring; a
/// corrupt credential row should read as a failed login, not a server fault.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("s3cret-phrase").unwrap();

        assert!(verify_password("s3cret-phrase", &hash));
        assert!(!verify_password("wrong-phrase", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_garbage_hash_is_false() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }
}
