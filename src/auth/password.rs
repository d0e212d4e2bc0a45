//! Password hashing.
//!
//! Passwords are hashed with Argon2id and a random salt. Hashing is slow on
//! purpose, so callers in async code should move it to a blocking thread.

use std::sync::LazyLock;

use argon2::{
    Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier as _,
    password_hash::{Error, SaltString},
};

use rand::Rng as _;

/// A hash of an unguessable password, verified against when a login names a
/// user that does not exist so both failures take the same time.
static DECOY_HASH: LazyLock<Option<String>> = LazyLock::new(|| {
    let mut decoy = [0u8; 32];
    rand::rng().fill(&mut decoy);
    hash(&base16::encode_lower(&decoy)).ok()
});

fn salt() -> Result<SaltString, Error> {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    SaltString::encode_b64(&bytes)
}

/// Hashes a password into a PHC string.
pub fn hash(password: &str) -> Result<String, Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt()?)
        .map(|h| h.to_string())
}

/// Checks a password against a PHC string.
///
/// A malformed stored hash never verifies.
pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), &hash)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Burns the same time as [`verify`] without anything to verify against.
///
/// Always returns `false`.
pub fn verify_decoy(password: &str) -> bool {
    if let Some(decoy) = DECOY_HASH.as_deref() {
        verify(password, decoy);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_hash_and_verify() {
        let hashword = hash("pw123456").unwrap();

        assert!(hashword.starts_with("$argon2id$"));
        assert!(!hashword.contains("pw123456"));

        assert!(verify("pw123456", &hashword));
        assert!(!verify("wrong", &hashword));
    }

    #[test]
    pub fn test_salted() {
        assert_ne!(hash("pw123456").unwrap(), hash("pw123456").unwrap());
    }

    #[test]
    pub fn test_malformed_hash() {
        assert!(!verify("pw123456", "not a hash"));
        assert!(!verify("pw123456", ""));
    }

    #[test]
    pub fn test_decoy() {
        assert!(!verify_decoy("pw123456"));
    }
}
