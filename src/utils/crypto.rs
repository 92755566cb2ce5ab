use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use std::sync::OnceLock;

use crate::error::{Error, Result};

pub fn hash_password(plain: &str) -> std::result::Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(plain.as_bytes(), &salt)?.to_string();
    Ok(password_hash)
}

pub fn verify_password(
    plain: &str,
    hashed: &str,
) -> std::result::Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hashed)?;
    let ok = Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok();
    Ok(ok)
}

/// Hash verified when the login email is unknown, so both failure paths do
/// the same amount of work.
fn dummy_hash() -> Option<&'static str> {
    static DUMMY: OnceLock<Option<String>> = OnceLock::new();
    DUMMY
        .get_or_init(|| hash_password("dummy-password-for-timing").ok())
        .as_deref()
}

pub async fn hash_password_blocking(plain: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .map_err(|e| Error::Internal(format!("hashing task failed: {}", e)))?
        .map_err(|e| Error::PasswordHash(e.to_string()))
}

/// Verifies `plain` against `hashed`. A missing or unparseable stored hash
/// is checked against a throwaway hash instead and always yields `false`.
pub async fn verify_password_blocking(plain: String, hashed: Option<String>) -> Result<bool> {
    tokio::task::spawn_blocking(move || {
        if let Some(hash) = hashed {
            match verify_password(&plain, &hash) {
                Ok(verified) => return verified,
                Err(e) => {
                    tracing::warn!(error = %e, "stored password hash is not a valid PHC string")
                }
            }
        }
        if let Some(dummy) = dummy_hash() {
            let _ = verify_password(&plain, dummy);
        }
        false
    })
    .await
    .map_err(|e| Error::Internal(format!("verification task failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_salted_and_verifiable() {
        let a = hash_password("hunter22").unwrap();
        let b = hash_password("hunter22").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2"));
        assert!(verify_password("hunter22", &a).unwrap());
        assert!(!verify_password("hunter23", &a).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("x", "plaintext-password").is_err());
    }

    #[tokio::test]
    async fn blocking_wrappers_round_trip() {
        let hash = hash_password_blocking("secret1".into()).await.unwrap();
        assert!(verify_password_blocking("secret1".into(), Some(hash.clone()))
            .await
            .unwrap());
        assert!(!verify_password_blocking("nope".into(), Some(hash)).await.unwrap());
        assert!(!verify_password_blocking("secret1".into(), None).await.unwrap());
    }

    #[tokio::test]
    async fn unparseable_stored_hash_fails_like_unknown_email() {
        let legacy = verify_password_blocking("guess".into(), Some("legacy-plaintext".into()))
            .await
            .unwrap();
        let unknown = verify_password_blocking("guess".into(), None).await.unwrap();
        assert!(!legacy);
        assert_eq!(legacy, unknown);
    }
}
