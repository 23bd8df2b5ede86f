use crate::auth::{Authenticator, SignInOutcome};
use crate::constant::REDACTED;
use crate::domain::SignInRequest;
use crate::error::AuthError;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Serialize;

/// The development-time record emitted in place of a real sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    pub email: String,
    pub password: String,
    pub keep_logged_in: bool,
}

impl DiagnosticRecord {
    pub fn new(request: &SignInRequest, expose_password: bool) -> Self {
        let password = if expose_password {
            request.password.expose_secret().clone()
        } else {
            REDACTED.to_string()
        };
        Self {
            email: request.email.clone(),
            password,
            keep_logged_in: request.keep_logged_in,
        }
    }
}

/// Stands in for authentication: logs what would have been sent and
/// reports nothing back to the user.
#[derive(Debug, Clone)]
pub struct DiagnosticAuthenticator {
    expose_password: bool,
}

impl DiagnosticAuthenticator {
    pub fn new(expose_password: bool) -> Self {
        Self { expose_password }
    }
}

#[async_trait]
impl Authenticator for DiagnosticAuthenticator {
    #[tracing::instrument(name = "Diagnostic sign-in", skip(self, request))]
    async fn authenticate(&self, request: &SignInRequest) -> Result<SignInOutcome, AuthError> {
        let record = DiagnosticRecord::new(request, self.expose_password);
        match serde_json::to_string(&record) {
            Ok(json) => tracing::info!(record = %json, "Signing in with"),
            Err(e) => tracing::warn!("Failed to serialize the diagnostic record: {:?}", e),
        }
        Ok(SignInOutcome::Recorded)
    }
}
