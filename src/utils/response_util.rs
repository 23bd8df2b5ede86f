use actix_web::http::header::{ContentType, LOCATION};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

pub fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

pub fn ok_to(body: String) -> HttpResponse {
    html_with_status(StatusCode::OK, body)
}

pub fn html_with_status(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

/// The browser keeps showing the current page and does not navigate.
pub fn stay_on_page() -> HttpResponse {
    HttpResponse::NoContent().finish()
}
