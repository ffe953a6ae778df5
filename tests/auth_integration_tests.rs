//! End-to-end tests for the authentication endpoints, driven through the
//! actix test harness.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::json;

use authgate::auth::jwt::{JwtConfig, JwtService};
use authgate::auth::password::PasswordService;
use authgate::auth::routes::configure_auth_routes;
use authgate::auth::service::AuthService;
use authgate::health::health;
use authgate::user::repository::MemoryUserRepository;

fn auth_service() -> web::Data<AuthService> {
    web::Data::new(AuthService::new(
        Arc::new(MemoryUserRepository::new()),
        JwtService::new(JwtConfig::default()),
        PasswordService::new(),
    ))
}

macro_rules! test_app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .app_data($service.clone())
                .configure(configure_auth_routes)
                .route("/health", web::get().to(health)),
        )
        .await
    };
}

fn register_payload() -> serde_json::Value {
    json!({
        "username": "testuser",
        "email": "test@example.com",
        "password": "Password123"
    })
}

#[actix_web::test]
async fn test_register_endpoint() {
    let service = auth_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(register_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["user"]["username"], "testuser");
    assert_eq!(body["data"]["user"]["email"], "test@example.com");
    assert!(body["data"]["tokens"]["access_token"].is_string());
    assert!(body["data"]["tokens"]["refresh_token"].is_string());
    assert_eq!(body["data"]["tokens"]["token_type"], "Bearer");
    // The password never appears in any response
    assert!(body["data"]["user"].get("password_hash").is_none());
}

#[actix_web::test]
async fn test_register_duplicate_username_conflicts() {
    let service = auth_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(register_payload())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "username": "testuser",
            "email": "other@example.com",
            "password": "Password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 10102);
    assert_eq!(body["message"], "Username already exists");
}

#[actix_web::test]
async fn test_register_duplicate_email_conflicts() {
    let service = auth_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(register_payload())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "username": "otheruser",
            "email": "test@example.com",
            "password": "Password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email already exists");
}

#[actix_web::test]
async fn test_register_weak_password_rejected() {
    let service = auth_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "username": "testuser",
            "email": "test@example.com",
            "password": "weak"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 10103);
}

#[actix_web::test]
async fn test_login_with_username_and_email() {
    let service = auth_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(register_payload())
        .to_request();
    test::call_service(&app, req).await;

    for identifier in ["testuser", "test@example.com"] {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "identifier": identifier, "password": "Password123" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["user"]["username"], "testuser");
        assert!(body["data"]["tokens"]["access_token"].is_string());
    }
}

#[actix_web::test]
async fn test_login_failures_are_unauthorized() {
    let service = auth_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(register_payload())
        .to_request();
    test::call_service(&app, req).await;

    // Wrong password and unknown identifier produce the same error
    for payload in [
        json!({ "identifier": "testuser", "password": "WrongPass123" }),
        json!({ "identifier": "nosuchuser", "password": "Password123" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 10101);
        assert_eq!(body["message"], "Invalid credentials");
    }
}

#[actix_web::test]
async fn test_refresh_token_endpoint() {
    let service = auth_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(register_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let refresh_token = body["data"]["tokens"]["refresh_token"].as_str().unwrap().to_string();
    let access_token = body["data"]["tokens"]["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .set_json(json!({ "refresh_token": refresh_token }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["data"]["tokens"]["access_token"].is_string());

    // An access token is not a refresh token
    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .set_json(json!({ "refresh_token": access_token }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_me_endpoint() {
    let service = auth_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(register_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let access_token = body["data"]["tokens"]["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["username"], "testuser");

    // Missing and malformed credentials are rejected
    let req = test::TestRequest::get().uri("/auth/me").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let service = auth_service();
    let app = test_app!(service);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
