//! PBKDF2-SHA256 password hashing implementation.

use pbkdf2::{
    Pbkdf2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use vellum_core::ports::{AuthError, PasswordService};

/// PBKDF2-based password service.
///
/// Each hash carries its own random salt and parameters in the PHC string,
/// so verification needs no extra state.
pub struct Pbkdf2PasswordService;

impl Pbkdf2PasswordService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Pbkdf2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Pbkdf2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        Pbkdf2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Pbkdf2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = Pbkdf2PasswordService::new();
        let password = "secure_password_123";

        let hash = service.hash(password).unwrap();
        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted_pbkdf2_sha256() {
        let service = Pbkdf2PasswordService::new();

        let first = service.hash("pw123456").unwrap();
        let second = service.hash("pw123456").unwrap();

        assert!(first.starts_with("$pbkdf2-sha256$"));
        assert!(!first.contains("pw123456"));
        // A fresh salt per hash means the same password never repeats.
        assert_ne!(first, second);
    }
}
