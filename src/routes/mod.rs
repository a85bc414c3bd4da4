//! Actix-web binding for the user endpoints.

use std::time::Duration;

use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, error, web};

use crate::dto::response::Response;

pub mod user;

/// Per-request settings shared by every handler.
#[derive(Clone, Copy, Debug)]
pub struct RequestSettings {
    /// Deadline applied to each request's store work.
    pub timeout: Duration,
}

/// Renders an envelope with the HTTP status it carries.
pub fn respond(response: Response) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(response)
}

fn invalid_format(err: impl std::fmt::Display) -> Response {
    Response::bad_request(format!("invalid request format: '{err}'"))
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = respond(invalid_format(&err));
        error::InternalError::from_response(err, response).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = respond(invalid_format(&err));
        error::InternalError::from_response(err, response).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = respond(invalid_format(&err));
        error::InternalError::from_response(err, response).into()
    })
}

/// CORS policy: a single origin when configured, otherwise any origin.
pub fn cors(allowed_origin: Option<&str>) -> Cors {
    let cors = match allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS", "HEAD"])
        .allow_any_header()
        .max_age(3600)
}

/// Registers the user routes and their extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(user::create_user)
        .service(user::list_users)
        .service(user::get_user)
        .service(user::update_user)
        .service(user::delete_user);
}
