//! Authentication routes configuration
//!
//! Defines all authentication-related HTTP endpoints.

use actix_web::web;

use crate::auth::handlers::{login, me, refresh_token, register};

/// Configure all authentication routes
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/refresh", web::post().to(refresh_token))
            .route("/me", web::get().to(me)),
    );
}
