use crate::constant::SAMPLE_EMAIL;
use secrecy::{ExposeSecret, Secret};

/// A single user interaction with the sign-in form.
#[derive(Debug, Clone)]
pub enum FormEvent {
    EmailChanged(String),
    PasswordChanged(Secret<String>),
    KeepLoggedInChanged(bool),
    TogglePasswordVisibility,
}

/// Everything the sign-in form remembers between two renders.
///
/// The state is never mutated in place: [`SignInState::apply`] hands back a
/// new value, so a render is always a function of one immutable snapshot.
#[derive(Debug, Clone)]
pub struct SignInState {
    email: String,
    password: Secret<String>,
    keep_logged_in: bool,
    show_password: bool,
}

impl SignInState {
    /// The state of a freshly mounted form, with `sample_email` pre-filled.
    pub fn new(sample_email: impl Into<String>) -> Self {
        Self {
            email: sample_email.into(),
            password: Secret::new(String::new()),
            keep_logged_in: false,
            show_password: false,
        }
    }

    pub fn apply(&self, event: FormEvent) -> Self {
        let mut next = self.clone();
        match event {
            FormEvent::EmailChanged(email) => next.email = email,
            FormEvent::PasswordChanged(password) => next.password = password,
            FormEvent::KeepLoggedInChanged(checked) => next.keep_logged_in = checked,
            FormEvent::TogglePasswordVisibility => next.show_password = !self.show_password,
        }
        next
    }

    /// Replays `events` on top of `self`, oldest first.
    pub fn apply_all(&self, events: impl IntoIterator<Item = FormEvent>) -> Self {
        events
            .into_iter()
            .fold(self.clone(), |state, event| state.apply(event))
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }

    pub fn keep_logged_in(&self) -> bool {
        self.keep_logged_in
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }
}

impl Default for SignInState {
    fn default() -> Self {
        Self::new(SAMPLE_EMAIL)
    }
}

impl PartialEq for SignInState {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
            && self.password.expose_secret() == other.password.expose_secret()
            && self.keep_logged_in == other.keep_logged_in
            && self.show_password == other.show_password
    }
}

impl Eq for SignInState {}
