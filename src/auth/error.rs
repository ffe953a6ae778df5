use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::common::code::{category, make_code, module};
use crate::common::response::ErrorResponse;
use crate::user::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Password must be at least 8 characters and contain uppercase, lowercase, and numbers")]
    WeakPassword,
    #[error("Username already exists")]
    UsernameExists,
    #[error("Email already exists")]
    EmailExists,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Token expired")]
    TokenExpired,
    #[error("{0}")]
    TokenInvalid(String),
    #[error("User not found")]
    UserNotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

impl AuthError {
    /// Business code in CMMRR format for the error envelope.
    pub fn code(&self) -> i32 {
        let reason = match self {
            AuthError::InvalidCredentials => 1,
            AuthError::UsernameExists | AuthError::EmailExists => 2,
            AuthError::WeakPassword => 3,
            AuthError::TokenExpired => 4,
            AuthError::TokenInvalid(_) => 5,
            AuthError::UserNotFound => 7,
            AuthError::Internal(_) => {
                return make_code(category::UNKNOWN_ERROR, module::AUTH, 99);
            },
        };
        make_code(category::BUSINESS_ERROR, module::AUTH, reason)
    }
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::WeakPassword => StatusCode::BAD_REQUEST,
            AuthError::UsernameExists | AuthError::EmailExists => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::TokenExpired | AuthError::TokenInvalid(_) => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorResponse::new(self.code(), self.to_string()))
    }
}
