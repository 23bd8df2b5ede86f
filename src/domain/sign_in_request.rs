use secrecy::Secret;

/// What the form hands to the authentication collaborator once the native
/// constraints are satisfied.
#[derive(Debug, Clone)]
pub struct SignInRequest {
    pub email: String,
    pub password: Secret<String>,
    /// Captured but never interpreted by the form.
    pub keep_logged_in: bool,
}
