//! Client-side field validation.
//!
//! Mirrors what the server will reject anyway, so a doomed submit can fail
//! locally without a network round trip. Messages are static and name the
//! offending field.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::auth::password::PasswordService;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 50;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validate the login fields of the schema-validated form variant.
pub fn validate_login_fields(identifier: &str, password: &str) -> Result<(), &'static str> {
    if identifier.is_empty() {
        return Err("Email is required");
    }
    if !is_email(identifier) {
        return Err("Email is invalid");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

/// Validate the registration fields.
pub fn validate_register_fields(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), &'static str> {
    if username.len() < MIN_USERNAME_LENGTH || username.len() > MAX_USERNAME_LENGTH {
        return Err("Username must be between 3 and 50 characters");
    }
    if email.is_empty() {
        return Err("Email is required");
    }
    if !is_email(email) {
        return Err("Email is invalid");
    }
    if !PasswordService::check_password_strength(password) {
        return Err("Password must be at least 8 characters and contain uppercase, lowercase, and numbers");
    }
    Ok(())
}
