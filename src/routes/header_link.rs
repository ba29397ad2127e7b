use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::LangQuery;
use crate::forms::header_link::HeaderLinkForm;
use crate::repository::DieselRepository;
use crate::routes::{deleted, error_response};
use crate::services::header_link as header_link_service;

#[get("/header")]
pub async fn list_header_links(
    query: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match header_link_service::list_header_links(repo.get_ref(), query.lang) {
        Ok(links) => HttpResponse::Ok().json(links),
        Err(err) => error_response(err),
    }
}

#[post("/header")]
pub async fn create_header_link(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<HeaderLinkForm>,
) -> impl Responder {
    match header_link_service::create_header_link(repo.get_ref(), form) {
        Ok(link) => HttpResponse::Created().json(link),
        Err(err) => error_response(err),
    }
}

#[put("/header/{id}")]
pub async fn update_header_link(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<HeaderLinkForm>,
) -> impl Responder {
    match header_link_service::update_header_link(repo.get_ref(), id.into_inner(), form) {
        Ok(link) => HttpResponse::Ok().json(link),
        Err(err) => error_response(err),
    }
}

#[delete("/header/{id}")]
pub async fn delete_header_link(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match header_link_service::delete_header_link(repo.get_ref(), id.into_inner()) {
        Ok(()) => deleted("Header link deleted"),
        Err(err) => error_response(err),
    }
}
