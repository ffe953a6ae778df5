//! HTTP handlers for the authentication endpoints.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::dto::{
    LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest,
    RegisterResponse, UserResponse,
};
use crate::auth::error::{AuthError, AuthResult};
use crate::auth::service::AuthService;
use crate::common::response::ApiResponse;

/// Handles user registration requests.
pub async fn register(
    service: web::Data<AuthService>,
    body: web::Json<RegisterRequest>,
) -> AuthResult<HttpResponse> {
    let req = body.into_inner();
    let (user, tokens) = service.register(req.username, req.email, req.password).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(RegisterResponse {
        user: user.into(),
        tokens,
    })))
}

/// Handles user login requests.
pub async fn login(
    service: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> AuthResult<HttpResponse> {
    let req = body.into_inner();
    let (user, tokens) = service.login(req.identifier, req.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(LoginResponse {
        user: user.into(),
        tokens,
    })))
}

/// Exchanges a refresh token for a new token pair.
pub async fn refresh_token(
    service: web::Data<AuthService>,
    body: web::Json<RefreshTokenRequest>,
) -> AuthResult<HttpResponse> {
    let tokens = service.refresh_token(&body.refresh_token)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(RefreshTokenResponse { tokens })))
}

/// Returns the user behind the presented access token.
pub async fn me(service: web::Data<AuthService>, req: HttpRequest) -> AuthResult<HttpResponse> {
    let token = bearer_token(&req)?;
    let claims = service.verify_access_token(&token)?;
    let user = service.get_user(&claims.sub).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UserResponse::from(user))))
}

fn bearer_token(req: &HttpRequest) -> AuthResult<String> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AuthError::TokenInvalid("Missing Authorization header".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .map(str::to_owned)
        .ok_or_else(|| AuthError::TokenInvalid("Authorization header is not a Bearer token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token_extraction() {
        let req = TestRequest::get()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_http_request();
        assert_eq!(bearer_token(&req).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let req = TestRequest::get().to_http_request();
        assert!(matches!(bearer_token(&req), Err(AuthError::TokenInvalid(_))));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let req = TestRequest::get()
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert!(matches!(bearer_token(&req), Err(AuthError::TokenInvalid(_))));
    }
}
