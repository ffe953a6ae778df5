//! Password hashing and strength rules.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};

use crate::auth::error::{AuthError, AuthResult};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Argon2 hashing with per-hash random salts.
#[derive(Clone, Default)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a plaintext password.
    pub fn hash_password(&self, password: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Internal(format!("Failed to hash password: {}", e)))
    }

    /// Verify a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, hash: &str) -> AuthResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AuthError::Internal(format!("Failed to parse password hash: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::Internal(format!("Password verification failed: {}", e))),
        }
    }

    /// Minimum strength rule shared with the client-side form validation:
    /// at least 8 characters with uppercase, lowercase, and a digit.
    pub fn check_password_strength(password: &str) -> bool {
        if password.len() < MIN_PASSWORD_LENGTH {
            return false;
        }
        if !password.chars().any(|c| c.is_lowercase()) {
            return false;
        }
        if !password.chars().any(|c| c.is_uppercase()) {
            return false;
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }
        true
    }
}
