//! Password hashing / verification (Argon2id).
//!
//! Responsibility:
//! - One-way hashing of signup passwords into a PHC string (`$argon2id$...`,
//!   salt and parameters embedded)
//! - Verification of a signin password against the stored hash
//!
//! Notes:
//! - Parameters are the `argon2` crate defaults (Argon2id, memory-hard).
//!   They are fixed here; callers cannot weaken them.
//! - The plaintext never leaves this module and is never logged.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

pub use argon2::password_hash::Error as PasswordHashError;

/// Hash a plaintext password with a fresh random salt.
pub fn hash(plaintext: &str) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plaintext.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check `plaintext` against a stored PHC hash.
///
/// - `Ok(false)` on mismatch (mismatch is not an error)
/// - `Err` only when the stored hash itself does not parse
pub fn verify(stored: &str, plaintext: &str) -> Result<bool, PasswordHashError> {
    let parsed = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let stored = hash("correct horse battery staple").unwrap();
        assert!(verify(&stored, "correct horse battery staple").unwrap());
    }

    #[test]
    fn wrong_password_verifies_false() {
        let stored = hash("pw").unwrap();
        assert!(!verify(&stored, "pw2").unwrap());
        assert!(!verify(&stored, "").unwrap());
    }

    #[test]
    fn hash_is_salted() {
        // 同じ平文でも salt が違うので別の文字列になる
        assert_ne!(hash("pw").unwrap(), hash("pw").unwrap());
    }

    #[test]
    fn hash_does_not_contain_the_plaintext() {
        let stored = hash("hunter2-plaintext").unwrap();
        assert!(stored.starts_with("$argon2id$"));
        assert!(!stored.contains("hunter2-plaintext"));
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(verify("not-a-phc-string", "pw").is_err());
    }
}
