use crate::constant::LOGIN_PATH;
use crate::utils;
use actix_web::HttpResponse;

/// The form is the whole application, so the root just points at it.
#[tracing::instrument(name = "/: Homepage")]
pub async fn home() -> HttpResponse {
    utils::redirect_to(LOGIN_PATH)
}
