use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use authgate::auth::jwt::JwtService;
use authgate::auth::password::PasswordService;
use authgate::auth::routes::configure_auth_routes;
use authgate::auth::service::AuthService;
use authgate::config::load_config;
use authgate::health::health;
use authgate::user::repository::MemoryUserRepository;
use authgate::{SERVICE_NAME, VERSION};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = load_config()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let repo = Arc::new(MemoryUserRepository::new());
    let auth_service = web::Data::new(AuthService::new(
        repo,
        JwtService::new(config.jwt.clone()),
        PasswordService::new(),
    ));

    log::info!("{} v{} listening on {}", SERVICE_NAME, VERSION, config.server.bind_address);

    let cors_origins = config.cors_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors_origins))
            .app_data(auth_service.clone())
            .configure(configure_auth_routes)
            .route("/health", web::get().to(health))
    })
    .bind(&config.server.bind_address)?
    .run()
    .await
}

fn build_cors(origins: &[String]) -> Cors {
    if origins.iter().any(|origin| origin == "*") {
        return Cors::permissive();
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
}
