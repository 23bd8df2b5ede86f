use crate::domain::{FormEvent, SignInState};
use secrecy::Secret;
use serde::Deserialize;

/// The fields a browser posts from the sign-in form.
///
/// An unchecked checkbox is simply absent, and a browser may leave out
/// empty fields too, so every field is optional.
#[derive(Deserialize)]
pub struct SignInData {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
    #[serde(default, rename = "keep-logged-in")]
    pub keep_logged_in: Option<String>,
    #[serde(default, rename = "show-password")]
    pub show_password: bool,
}

impl SignInData {
    /// The change events that turn the initial form into the one the browser submitted.
    pub fn into_events(self) -> Vec<FormEvent> {
        let mut events = vec![
            FormEvent::EmailChanged(self.email.unwrap_or_default()),
            FormEvent::PasswordChanged(
                self.password.unwrap_or_else(|| Secret::new(String::new())),
            ),
            FormEvent::KeepLoggedInChanged(self.keep_logged_in.is_some()),
        ];
        if self.show_password {
            events.push(FormEvent::TogglePasswordVisibility);
        }
        events
    }

    /// Rebuild the submitted form on top of `initial`.
    pub fn into_state(self, initial: &SignInState) -> SignInState {
        initial.apply_all(self.into_events())
    }
}
