use crate::constant::{HIDE_PASSWORD_LABEL, LOGIN_PATH, SHOW_PASSWORD_LABEL, VISIBILITY_PATH};
use crate::domain::SignInState;
use secrecy::ExposeSecret;
use std::fmt::{Debug, Formatter};

const SIGN_IN_TEMPLATE: &str = include_str!("sign_in.html");

/// How the password input displays its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordInputMode {
    Masked,
    Plain,
}

impl PasswordInputMode {
    /// The `type` attribute of the password `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            PasswordInputMode::Masked => "password",
            PasswordInputMode::Plain => "text",
        }
    }
}

/// The glyph drawn inside the visibility toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityIcon {
    Eye,
    EyeOff,
}

impl VisibilityIcon {
    pub fn svg(self) -> &'static str {
        match self {
            VisibilityIcon::Eye => include_str!("eye.svg").trim_end(),
            VisibilityIcon::EyeOff => include_str!("eye_off.svg").trim_end(),
        }
    }
}

/// A rendering description of the sign-in form, derived from one [`SignInState`].
#[derive(Clone, PartialEq, Eq)]
pub struct SignInView {
    pub email: String,
    pub password: String,
    pub password_mode: PasswordInputMode,
    pub toggle_icon: VisibilityIcon,
    /// Names the action the toggle will perform, not the one just taken.
    pub toggle_label: &'static str,
    pub keep_logged_in: bool,
    pub show_password: bool,
    pub error: Option<String>,
}

impl SignInView {
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Fill the page template. Every value coming from the user is escaped.
    pub fn render(&self) -> String {
        let error = self
            .error
            .as_deref()
            .map(|msg| {
                format!(
                    r#"<p role="alert" class="mb-6 text-sm text-red-600"><i>{}</i></p>"#,
                    htmlescape::encode_minimal(msg)
                )
            })
            .unwrap_or_default();
        let checked = if self.keep_logged_in { " checked" } else { "" };

        fill_template(SIGN_IN_TEMPLATE, |key| match key {
            "login_path" => Some(LOGIN_PATH.to_string()),
            "visibility_path" => Some(VISIBILITY_PATH.to_string()),
            "show_password" => Some(self.show_password.to_string()),
            "error" => Some(error.clone()),
            "email" => Some(htmlescape::encode_minimal(&self.email)),
            "password" => Some(htmlescape::encode_minimal(&self.password)),
            "password_type" => Some(self.password_mode.input_type().to_string()),
            "toggle_label" => Some(self.toggle_label.to_string()),
            "toggle_icon" => Some(self.toggle_icon.svg().to_string()),
            "keep_logged_in_checked" => Some(checked.to_string()),
            _ => None,
        })
    }
}

impl Debug for SignInView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInView")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("password_mode", &self.password_mode)
            .field("toggle_icon", &self.toggle_icon)
            .field("toggle_label", &self.toggle_label)
            .field("keep_logged_in", &self.keep_logged_in)
            .field("show_password", &self.show_password)
            .field("error", &self.error)
            .finish()
    }
}

impl From<&SignInState> for SignInView {
    fn from(state: &SignInState) -> Self {
        let (password_mode, toggle_icon, toggle_label) = if state.show_password() {
            (PasswordInputMode::Plain, VisibilityIcon::Eye, HIDE_PASSWORD_LABEL)
        } else {
            (PasswordInputMode::Masked, VisibilityIcon::EyeOff, SHOW_PASSWORD_LABEL)
        };
        Self {
            email: state.email().to_string(),
            password: state.password().expose_secret().to_string(),
            password_mode,
            toggle_icon,
            toggle_label,
            keep_logged_in: state.keep_logged_in(),
            show_password: state.show_password(),
            error: None,
        }
    }
}

/// Replace every `{name}` placeholder of `template` in a single pass, so
/// substituted values are never scanned for placeholders again.
/// Unknown names are left as they are.
fn fill_template(template: &str, value_of: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let replaced = tail.find('}').and_then(|end| {
            let key = &tail[..end];
            value_of(key).map(|value| (value, end))
        });
        match replaced {
            Some((value, end)) => {
                out.push_str(&value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
