use crate::configuration::SignInSettings;
use crate::domain::FormEvent;
use crate::request::SignInData;
use crate::utils;
use crate::view::SignInView;
use actix_web::{web, HttpResponse};

/// The visibility toggle. It re-renders the form with the password shown or
/// hidden and never runs the sign-in itself.
#[tracing::instrument(name = "Toggle password visibility", skip(form, settings))]
pub async fn toggle_password_visibility(
    form: web::Form<SignInData>,
    settings: web::Data<SignInSettings>,
) -> HttpResponse {
    let state = form
        .into_inner()
        .into_state(&settings.initial_state())
        .apply(FormEvent::TogglePasswordVisibility);
    utils::ok_to(SignInView::from(&state).render())
}
