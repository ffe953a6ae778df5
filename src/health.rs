//! Service health endpoint.

use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::{SERVICE_NAME, VERSION};

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": VERSION,
        "timestamp": Utc::now().timestamp_millis(),
    }))
}
