use std::fmt::{Debug, Formatter};

/// Failures an authentication collaborator may report back to the form.
#[derive(thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("We could not reach the sign-in service. Please try again.")]
    Network(#[source] anyhow::Error),
}

impl Debug for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
