//! Credential submission client.
//!
//! The thin HTTP side of the login and registration forms: `AuthClient`
//! serializes the credentials, issues a single POST, and collapses every
//! failure into one generic outcome; the form types track the
//! idle/submitting/failed/success state around each submit.

pub mod form;
pub mod submit;
pub mod validate;

pub use form::{LoginForm, RegisterForm, SubmitState};
pub use submit::{AuthClient, SubmitError};
