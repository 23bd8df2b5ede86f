use crate::auth::{Authenticator, SignInOutcome};
use crate::configuration::SignInSettings;
use crate::domain::{FormEvent, NativeConstraints, SignInState};
use crate::error::BizErrorEnum;
use crate::request::SignInData;
use crate::telemetry;
use crate::utils;
use crate::view::SignInView;
use actix_web::{web, HttpResponse, ResponseError};
use secrecy::Secret;

#[tracing::instrument(
    name = "Sign in",
    skip(form, settings, authenticator),
    fields(email = tracing::field::Empty, keep_logged_in = tracing::field::Empty)
)]
pub async fn sign_in(
    form: web::Form<SignInData>,
    settings: web::Data<SignInSettings>,
    authenticator: web::Data<dyn Authenticator>,
) -> HttpResponse {
    let state = form.into_inner().into_state(&settings.initial_state());

    let request = match NativeConstraints::check(&state) {
        Ok(request) => request,
        Err(error) => return render_with_error(&state, error),
    };
    telemetry::record_field("email", &request.email);
    telemetry::record_field("keep_logged_in", &request.keep_logged_in);

    match authenticator.authenticate(&request).await {
        Ok(SignInOutcome::Recorded) => utils::stay_on_page(),
        Ok(SignInOutcome::Redirect(location)) => utils::redirect_to(&location),
        Err(error) => {
            tracing::warn!("Sign-in failed: {:?}", error);
            // A rejected password is never sent back to the browser.
            let state = state.apply(FormEvent::PasswordChanged(Secret::new(String::new())));
            render_with_error(&state, error.into())
        }
    }
}

/// Show the form again, values kept, with the error inline.
fn render_with_error(state: &SignInState, error: BizErrorEnum) -> HttpResponse {
    let body = SignInView::from(state)
        .with_error(error.to_string())
        .render();
    utils::html_with_status(error.status_code(), body)
}
