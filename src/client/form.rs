//! Per-form submit state tracking.
//!
//! Each form instance walks `Idle -> Submitting -> {Success, Failed}`.
//! `Failed` clears back through `Submitting` on the next submit; `Success`
//! is terminal for the instance (the page navigates away). A submit is
//! refused while one is in flight, so at most one request is ever pending
//! per form.

use crate::auth::dto::{LoginRequest, RegisterRequest};
use crate::client::submit::AuthClient;
use crate::client::validate;

pub const LOGIN_FAILED: &str = "Invalid email or password";
pub const REGISTER_FAILED: &str = "Registration failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Failed(&'static str),
    Success,
}

impl Default for SubmitState {
    fn default() -> Self {
        SubmitState::Idle
    }
}

impl SubmitState {
    fn may_submit(&self) -> bool {
        matches!(self, SubmitState::Idle | SubmitState::Failed(_))
    }
}

/// Login form state. Unvalidated by default: whatever was typed is sent,
/// including empty strings. `with_validation` enables the schema-validated
/// variant, which fails locally without issuing a request.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
    state: SubmitState,
    validate: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validation() -> Self {
        Self {
            validate: true,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn error(&self) -> Option<&'static str> {
        match self.state {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Drive one submit attempt. Refused unless the form is idle or failed;
    /// a previous error is cleared when the attempt starts.
    pub async fn submit(&mut self, client: &AuthClient) -> &SubmitState {
        if !self.state.may_submit() {
            return &self.state;
        }
        self.state = SubmitState::Submitting;

        if self.validate {
            if let Err(message) = validate::validate_login_fields(&self.identifier, &self.password)
            {
                self.state = SubmitState::Failed(message);
                return &self.state;
            }
        }

        let payload = LoginRequest {
            identifier: self.identifier.clone(),
            password: self.password.clone(),
        };

        self.state = match client.submit_login(&payload).await {
            Ok(body) => {
                log::debug!("login succeeded: {}", body);
                SubmitState::Success
            },
            Err(_) => SubmitState::Failed(LOGIN_FAILED),
        };
        &self.state
    }
}

/// Registration form state. Always schema-validated; this is the canonical
/// variant.
#[derive(Debug, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    state: SubmitState,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn error(&self) -> Option<&'static str> {
        match self.state {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Drive one submit attempt, validating the fields first.
    pub async fn submit(&mut self, client: &AuthClient) -> &SubmitState {
        if !self.state.may_submit() {
            return &self.state;
        }
        self.state = SubmitState::Submitting;

        if let Err(message) =
            validate::validate_register_fields(&self.username, &self.email, &self.password)
        {
            self.state = SubmitState::Failed(message);
            return &self.state;
        }

        let payload = RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        };

        self.state = match client.submit_register(&payload).await {
            Ok(body) => {
                log::debug!("registration succeeded: {}", body);
                SubmitState::Success
            },
            Err(_) => SubmitState::Failed(REGISTER_FAILED),
        };
        &self.state
    }
}
