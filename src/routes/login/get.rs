use crate::configuration::SignInSettings;
use crate::utils;
use crate::view::SignInView;
use actix_web::{web, HttpResponse};

#[tracing::instrument(name = "Get sign-in page", skip(settings))]
pub async fn sign_in_form(settings: web::Data<SignInSettings>) -> HttpResponse {
    let state = settings.initial_state();
    utils::ok_to(SignInView::from(&state).render())
}
