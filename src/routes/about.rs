use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, put, web};

use crate::dto::api::LangQuery;
use crate::forms::about::SaveAboutForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::about as about_service;
use crate::uploads::UploadStorage;

#[get("/about")]
pub async fn get_about(
    query: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match about_service::get_about(repo.get_ref(), query.lang) {
        Ok(about) => HttpResponse::Ok().json(about),
        Err(err) => error_response(err),
    }
}

#[put("/about")]
pub async fn save_about(
    query: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
    MultipartForm(form): MultipartForm<SaveAboutForm>,
) -> impl Responder {
    let payload = match form.into_payload(query.lang) {
        Ok(payload) => payload,
        Err(err) => return error_response(err.into()),
    };

    match about_service::save_about(repo.get_ref(), storage.get_ref(), payload) {
        Ok(about) => HttpResponse::Ok().json(about),
        Err(err) => error_response(err),
    }
}
