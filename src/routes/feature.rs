use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::LangQuery;
use crate::forms::feature::{AddFeatureItemForm, CreateFeatureSectionForm, UpdateFeatureSectionForm};
use crate::repository::DieselRepository;
use crate::routes::{deleted, error_response};
use crate::services::feature as feature_service;

#[get("/features")]
pub async fn list_feature_sections(
    query: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match feature_service::list_feature_sections(repo.get_ref(), query.lang) {
        Ok(sections) => HttpResponse::Ok().json(sections),
        Err(err) => error_response(err),
    }
}

#[post("/features")]
pub async fn create_feature_section(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateFeatureSectionForm>,
) -> impl Responder {
    match feature_service::create_feature_section(repo.get_ref(), form) {
        Ok(section) => HttpResponse::Created().json(section),
        Err(err) => error_response(err),
    }
}

#[put("/features/{id}")]
pub async fn update_feature_section(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateFeatureSectionForm>,
) -> impl Responder {
    match feature_service::update_feature_section(repo.get_ref(), id.into_inner(), form) {
        Ok(section) => HttpResponse::Ok().json(section),
        Err(err) => error_response(err),
    }
}

#[post("/features/{id}/item")]
pub async fn add_feature_item(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddFeatureItemForm>,
) -> impl Responder {
    match feature_service::add_feature_item(repo.get_ref(), id.into_inner(), form) {
        Ok(item) => HttpResponse::Created().json(item),
        Err(err) => error_response(err),
    }
}

#[delete("/features/item/{id}")]
pub async fn delete_feature_item(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match feature_service::delete_feature_item(repo.get_ref(), id.into_inner()) {
        Ok(()) => deleted("Feature item deleted"),
        Err(err) => error_response(err),
    }
}
