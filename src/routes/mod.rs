//! HTTP handlers of the site API.
//!
//! Handlers answer with JSON. Failures use the `{"message": ...}` body with
//! 404 for unknown records, 400 for invalid input and 500 otherwise.

use actix_multipart::MultipartError;
use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};

use crate::dto::api::MessageResponse;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

pub mod about;
pub mod blog;
pub mod certificate;
pub mod company_intro;
pub mod contact;
pub mod feature;
pub mod header_link;
pub mod project;
pub mod service;
pub mod statistic;
pub mod story;
pub mod team;

/// Maps a service failure to its HTTP response.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(MessageResponse::new("Not found")),
        ServiceError::Form(message)
        | ServiceError::TypeConstraint(message)
        | ServiceError::Upload(message) => {
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        ServiceError::Repository(RepositoryError::ConstraintViolation(message)) => {
            log::warn!("Rejected write: {message}");
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        err => {
            log::error!("Request failed: {err}");
            HttpResponse::InternalServerError().json(MessageResponse::new("Internal server error"))
        }
    }
}

/// Deletion acknowledgement.
pub fn deleted(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new(message))
}

fn bad_request<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::BadRequest().json(MessageResponse::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_request(err)
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_request(err)
}

pub fn multipart_error_handler(err: MultipartError, _req: &HttpRequest) -> actix_web::Error {
    bad_request(err)
}
