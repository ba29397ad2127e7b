use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::LangQuery;
use crate::forms::certificate::{CertificateForm, CertificatePayload};
use crate::repository::DieselRepository;
use crate::routes::{deleted, error_response};
use crate::services::certificate as certificate_service;
use crate::uploads::UploadStorage;

#[get("/certificates")]
pub async fn list_certificates(
    query: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match certificate_service::list_certificates(repo.get_ref(), query.lang) {
        Ok(certificates) => HttpResponse::Ok().json(certificates),
        Err(err) => error_response(err),
    }
}

#[post("/certificates")]
pub async fn create_certificate(
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
    MultipartForm(form): MultipartForm<CertificateForm>,
) -> impl Responder {
    let payload = match CertificatePayload::try_from(form) {
        Ok(payload) => payload,
        Err(err) => return error_response(err.into()),
    };

    match certificate_service::create_certificate(repo.get_ref(), storage.get_ref(), payload) {
        Ok(certificate) => HttpResponse::Created().json(certificate),
        Err(err) => error_response(err),
    }
}

#[put("/certificates/{id}")]
pub async fn update_certificate(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
    MultipartForm(form): MultipartForm<CertificateForm>,
) -> impl Responder {
    let payload = match CertificatePayload::try_from(form) {
        Ok(payload) => payload,
        Err(err) => return error_response(err.into()),
    };

    match certificate_service::update_certificate(
        repo.get_ref(),
        storage.get_ref(),
        id.into_inner(),
        payload,
    ) {
        Ok(certificate) => HttpResponse::Ok().json(certificate),
        Err(err) => error_response(err),
    }
}

#[delete("/certificates/{id}")]
pub async fn delete_certificate(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
) -> impl Responder {
    match certificate_service::delete_certificate(repo.get_ref(), storage.get_ref(), id.into_inner())
    {
        Ok(()) => deleted("Certificate deleted"),
        Err(err) => error_response(err),
    }
}
