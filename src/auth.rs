use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use tracing::warn;

use crate::error::ApiError;
use model::entities::{advert, user};

/// Hash a plaintext password with Argon2 and a fresh random salt.
///
/// The output is a PHC-format string carrying the salt and parameters, so
/// two calls with the same plaintext produce different values. Callers must
/// compare through [`verify_password`], never by string equality.
pub fn hash_password(plaintext: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plaintext.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC-format hash.
///
/// A stored value that does not parse as a PHC string reads as a mismatch,
/// same as a wrong password.
pub fn verify_password(plaintext: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Decide whether `user` may delete `advert`.
///
/// Pure predicate, evaluated strictly before the delete is issued. Only the
/// owner recorded on the advert row passes.
pub fn check_authority(user: &user::Model, advert: &advert::Model) -> Result<(), ApiError> {
    if user.id != advert.owner_id {
        warn!(
            "User {} attempted to delete advert {} owned by {}",
            user.id, advert.id, advert.owner_id
        );
        return Err(ApiError::Forbidden("User is not the owner".to_string()));
    }
    Ok(())
}
