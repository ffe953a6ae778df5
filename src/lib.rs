//! Authgate
//!
//! Credential submission client and the authentication service it targets.
//! Provides JWT-based registration and login endpoints, plus a thin HTTP
//! client with per-form submit state tracking for the pages that post
//! credentials to them.

pub mod auth;
pub mod client;
pub mod common;
pub mod config;
pub mod health;
pub mod user;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_NAME: &str = "authgate";
