use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::LangQuery;
use crate::forms::statistic::StatisticForm;
use crate::repository::DieselRepository;
use crate::routes::{deleted, error_response};
use crate::services::statistic as statistic_service;

#[get("/statistics")]
pub async fn list_statistics(
    query: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match statistic_service::list_statistics(repo.get_ref(), query.lang) {
        Ok(statistics) => HttpResponse::Ok().json(statistics),
        Err(err) => error_response(err),
    }
}

#[post("/statistics")]
pub async fn create_statistic(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<StatisticForm>,
) -> impl Responder {
    match statistic_service::create_statistic(repo.get_ref(), form) {
        Ok(statistic) => HttpResponse::Created().json(statistic),
        Err(err) => error_response(err),
    }
}

#[put("/statistics/{id}")]
pub async fn update_statistic(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<StatisticForm>,
) -> impl Responder {
    match statistic_service::update_statistic(repo.get_ref(), id.into_inner(), form) {
        Ok(statistic) => HttpResponse::Ok().json(statistic),
        Err(err) => error_response(err),
    }
}

#[delete("/statistics/{id}")]
pub async fn delete_statistic(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match statistic_service::delete_statistic(repo.get_ref(), id.into_inner()) {
        Ok(()) => deleted("Statistic deleted"),
        Err(err) => error_response(err),
    }
}
