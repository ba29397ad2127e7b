use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::LangQuery;
use crate::forms::service::ServiceForm;
use crate::repository::DieselRepository;
use crate::routes::{deleted, error_response};
use crate::services::service as service_service;

#[get("/services")]
pub async fn list_services(
    query: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service_service::list_services(repo.get_ref(), query.lang) {
        Ok(services) => HttpResponse::Ok().json(services),
        Err(err) => error_response(err),
    }
}

#[post("/services")]
pub async fn create_service(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ServiceForm>,
) -> impl Responder {
    match service_service::create_service(repo.get_ref(), form) {
        Ok(service) => HttpResponse::Created().json(service),
        Err(err) => error_response(err),
    }
}

#[put("/services/{id}")]
pub async fn update_service(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ServiceForm>,
) -> impl Responder {
    match service_service::update_service(repo.get_ref(), id.into_inner(), form) {
        Ok(service) => HttpResponse::Ok().json(service),
        Err(err) => error_response(err),
    }
}

#[delete("/services/{id}")]
pub async fn delete_service(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service_service::delete_service(repo.get_ref(), id.into_inner()) {
        Ok(()) => deleted("Service deleted"),
        Err(err) => error_response(err),
    }
}
