use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::auth::dto::{LoginRequest, RegisterRequest};
use crate::config::ClientConfig;

/// The single failure signal a submit can produce. Network failures, non-2xx
/// statuses, and server rejections all collapse into this; the underlying
/// cause is logged but never surfaced to the caller.
#[derive(Debug, Error)]
#[error("request did not succeed")]
pub struct SubmitError;

/// HTTP client for the credential endpoints.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Build a client from configuration. No request timeout is set unless
    /// one is configured; a hung connection then blocks the submit
    /// indefinitely, exactly as an unconfigured browser fetch would.
    pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, config.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit login credentials. Issues exactly one POST to `/auth/login`
    /// with the JSON body `{identifier, password}`.
    pub async fn submit_login(&self, payload: &LoginRequest) -> Result<Value, SubmitError> {
        self.post("/auth/login", payload).await
    }

    /// Submit registration fields. Issues exactly one POST to
    /// `/auth/register` with the JSON body `{username, email, password}`.
    pub async fn submit_register(&self, payload: &RegisterRequest) -> Result<Value, SubmitError> {
        self.post("/auth/register", payload).await
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, payload: &T) -> Result<Value, SubmitError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.post(&url).json(payload).send().await.map_err(|e| {
            log::debug!("submit to {} failed: {}", url, e);
            SubmitError
        })?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("submit to {} rejected with status {}", url, status);
            return Err(SubmitError);
        }

        // Callers never consume the body beyond logging, so an unparseable
        // 2xx body is still a success.
        match response.json::<Value>().await {
            Ok(body) => Ok(body),
            Err(e) => {
                log::debug!("response body from {} was not JSON: {}", url, e);
                Ok(Value::Null)
            },
        }
    }
}
