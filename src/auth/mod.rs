pub mod dto;
pub mod error;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod routes;
pub mod service;

pub use error::{AuthError, AuthResult};
pub use service::AuthService;
