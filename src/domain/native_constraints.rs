use crate::domain::{SignInRequest, SignInState};
use crate::error::BizErrorEnum;
use secrecy::ExposeSecret;

/// The `required` and `type=email` checks a browser runs before it lets the
/// form submit, evaluated in document order.
pub struct NativeConstraints;

impl NativeConstraints {
    pub fn check(state: &SignInState) -> Result<SignInRequest, BizErrorEnum> {
        // Browsers strip surrounding whitespace from email inputs before
        // validating and submitting; the stored value stays untouched.
        let email = state.email().trim();
        if email.is_empty() {
            return Err(BizErrorEnum::EmailIsMissing);
        }
        if !validator::validate_email(email) {
            return Err(BizErrorEnum::EmailFormatIsIncorrect);
        }

        if state.password().expose_secret().is_empty() {
            return Err(BizErrorEnum::PasswordIsMissing);
        }

        Ok(SignInRequest {
            email: email.to_string(),
            password: state.password().clone(),
            keep_logged_in: state.keep_logged_in(),
        })
    }
}
