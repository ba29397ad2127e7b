use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::LangQuery;
use crate::forms::ImageForm;
use crate::forms::company_intro::SaveCompanyIntroForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::company_intro as company_intro_service;
use crate::uploads::UploadStorage;

#[get("/company-intro")]
pub async fn get_company_intro(
    query: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match company_intro_service::get_company_intro(repo.get_ref(), query.lang) {
        Ok(intro) => HttpResponse::Ok().json(intro),
        Err(err) => error_response(err),
    }
}

#[put("/company-intro")]
pub async fn save_company_intro(
    query: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SaveCompanyIntroForm>,
) -> impl Responder {
    match company_intro_service::save_company_intro(repo.get_ref(), query.lang, form) {
        Ok(intro) => HttpResponse::Ok().json(intro),
        Err(err) => error_response(err),
    }
}

#[post("/company-intro/image")]
pub async fn add_company_intro_image(
    query: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
    MultipartForm(form): MultipartForm<ImageForm>,
) -> impl Responder {
    let image = match form.into_image() {
        Ok(image) => image,
        Err(err) => return error_response(err.into()),
    };

    match company_intro_service::add_company_intro_image(
        repo.get_ref(),
        storage.get_ref(),
        query.lang,
        image,
    ) {
        Ok(intro) => HttpResponse::Created().json(intro),
        Err(err) => error_response(err),
    }
}

#[delete("/company-intro/image/{index}")]
pub async fn remove_company_intro_image(
    index: web::Path<usize>,
    query: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
) -> impl Responder {
    match company_intro_service::remove_company_intro_image(
        repo.get_ref(),
        storage.get_ref(),
        query.lang,
        index.into_inner(),
    ) {
        Ok(intro) => HttpResponse::Ok().json(intro),
        Err(err) => error_response(err),
    }
}
