use crate::domain::SignInRequest;
use crate::error::AuthError;
use async_trait::async_trait;

/// What a successful sign-in asks the form to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// The attempt was only recorded; the form stays where it is.
    Recorded,
    /// Send the browser to another page, e.g. the signed-in area.
    Redirect(String),
}

/// The external collaborator that actually authenticates a sign-in attempt.
///
/// The submit handler calls it exactly once per submission that passes the
/// native constraints, and maps both outcomes onto the response.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, request: &SignInRequest) -> Result<SignInOutcome, AuthError>;
}
