//! Registration, login, and token lifecycle.

use std::sync::Arc;

use uuid::Uuid;

use crate::auth::error::{AuthError, AuthResult};
use crate::auth::jwt::{Claims, JwtService, TokenPair};
use crate::auth::password::PasswordService;
use crate::user::models::User;
use crate::user::repository::UserRepository;

#[derive(Clone)]
pub struct AuthService {
    repo: Arc<dyn UserRepository>,
    jwt: JwtService,
    password: PasswordService,
}

impl AuthService {
    pub fn new(repo: Arc<dyn UserRepository>, jwt: JwtService, password: PasswordService) -> Self {
        Self { repo, jwt, password }
    }

    /// Register a new user.
    ///
    /// Rejects weak passwords and duplicate usernames or emails. Returns the
    /// stored user and a fresh token pair.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AuthResult<(User, TokenPair)> {
        if !PasswordService::check_password_strength(&password) {
            return Err(AuthError::WeakPassword);
        }

        if self.repo.find_by_username(&username).await?.is_some() {
            return Err(AuthError::UsernameExists);
        }
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailExists);
        }

        let password_hash = self.password.hash_password(&password)?;
        let user = self.repo.insert(User::new(username, email, password_hash)).await?;

        let tokens = self.token_pair(&user)?;
        log::info!("User {} registered", user.username);

        Ok((user, tokens))
    }

    /// Log a user in by username or email.
    ///
    /// Unknown identifiers and wrong passwords are indistinguishable to the
    /// caller; both come back as invalid credentials.
    pub async fn login(&self, identifier: String, password: String) -> AuthResult<(User, TokenPair)> {
        let user = self
            .repo
            .find_by_identifier(&identifier)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.password.verify_password(&password, &user.password_hash)? {
            log::warn!("Failed login attempt for {}", user.username);
            return Err(AuthError::InvalidCredentials);
        }

        let tokens = self.token_pair(&user)?;
        log::info!("User {} logged in", user.username);

        Ok((user, tokens))
    }

    /// Exchange a valid refresh token for a new token pair.
    pub fn refresh_token(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        let claims = self.jwt.verify_refresh_token(refresh_token)?;
        self.jwt
            .generate_token_pair(&claims.sub, &claims.username, &claims.email)
    }

    /// Verify an access token and return its claims.
    pub fn verify_access_token(&self, access_token: &str) -> AuthResult<Claims> {
        self.jwt.verify_access_token(access_token)
    }

    /// Load the user an access token belongs to.
    pub async fn get_user(&self, user_id: &str) -> AuthResult<User> {
        let id: Uuid = user_id
            .parse()
            .map_err(|_| AuthError::TokenInvalid("Malformed subject claim".to_string()))?;

        self.repo.find_by_id(id).await?.ok_or(AuthError::UserNotFound)
    }

    fn token_pair(&self, user: &User) -> AuthResult<TokenPair> {
        self.jwt
            .generate_token_pair(&user.id.to_string(), &user.username, &user.email)
    }
}
