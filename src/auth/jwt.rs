//! JWT token management
//!
//! Handles creation and validation of access/refresh token pairs. Access and
//! refresh tokens are signed with separate secrets and carry a `type` claim
//! so one can never stand in for the other.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::error::{AuthError, AuthResult};

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing access tokens
    pub access_secret: String,
    /// Secret key for signing refresh tokens
    pub refresh_secret: String,
    /// Access token expiration time (seconds)
    pub access_exp_seconds: i64,
    /// Refresh token expiration time (seconds)
    pub refresh_exp_seconds: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: "default_access_secret_change_in_production".to_string(),
            refresh_secret: "default_refresh_secret_change_in_production".to_string(),
            access_exp_seconds: 60 * 15,           // 15 minutes
            refresh_exp_seconds: 60 * 60 * 24 * 7, // 7 days
        }
    }
}

impl JwtConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_secret: std::env::var("JWT_ACCESS_SECRET")
                .unwrap_or(defaults.access_secret),
            refresh_secret: std::env::var("JWT_REFRESH_SECRET")
                .unwrap_or(defaults.refresh_secret),
            access_exp_seconds: std::env::var("JWT_ACCESS_EXP_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.access_exp_seconds),
            refresh_exp_seconds: std::env::var("JWT_REFRESH_EXP_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.refresh_exp_seconds),
        }
    }
}

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Username
    pub username: String,
    /// Email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Token identifier
    pub jti: String,
    /// Token type (access or refresh)
    #[serde(rename = "type")]
    pub token_type: String,
}

/// Token pair containing an access token and a refresh token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT service for token generation and validation
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Generate an access token
    pub fn generate_access_token(
        &self,
        user_id: &str,
        username: &str,
        email: &str,
    ) -> AuthResult<String> {
        self.generate_token(
            user_id,
            username,
            email,
            "access",
            self.config.access_exp_seconds,
            self.config.access_secret.as_ref(),
        )
    }

    /// Generate a refresh token
    pub fn generate_refresh_token(
        &self,
        user_id: &str,
        username: &str,
        email: &str,
    ) -> AuthResult<String> {
        self.generate_token(
            user_id,
            username,
            email,
            "refresh",
            self.config.refresh_exp_seconds,
            self.config.refresh_secret.as_ref(),
        )
    }

    /// Generate a token pair (access token + refresh token)
    pub fn generate_token_pair(
        &self,
        user_id: &str,
        username: &str,
        email: &str,
    ) -> AuthResult<TokenPair> {
        let access_token = self.generate_access_token(user_id, username, email)?;
        let refresh_token = self.generate_refresh_token(user_id, username, email)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.config.access_exp_seconds,
        })
    }

    /// Verify an access token
    pub fn verify_access_token(&self, token: &str) -> AuthResult<Claims> {
        self.verify_token(token, "access", self.config.access_secret.as_ref())
    }

    /// Verify a refresh token
    pub fn verify_refresh_token(&self, token: &str) -> AuthResult<Claims> {
        self.verify_token(token, "refresh", self.config.refresh_secret.as_ref())
    }

    fn generate_token(
        &self,
        user_id: &str,
        username: &str,
        email: &str,
        token_type: &str,
        exp_seconds: i64,
        secret: &[u8],
    ) -> AuthResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(exp_seconds);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: token_type.to_string(),
        };

        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret)).map_err(|e| {
            AuthError::Internal(format!("Failed to encode {} token: {}", token_type, e))
        })
    }

    fn verify_token(&self, token: &str, expected_type: &str, secret: &[u8]) -> AuthResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| map_decode_error(e, expected_type))?;

        if token_data.claims.token_type != expected_type {
            return Err(AuthError::TokenInvalid(format!(
                "Invalid token type, expected '{}'",
                expected_type
            )));
        }

        Ok(token_data.claims)
    }
}

fn map_decode_error(err: jsonwebtoken::errors::Error, token_type: &str) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::TokenInvalid(format!("Failed to decode {} token: {}", token_type, err)),
    }
}
