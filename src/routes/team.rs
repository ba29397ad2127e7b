use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::LangQuery;
use crate::forms::team::{TeamMemberForm, TeamMemberPayload};
use crate::repository::DieselRepository;
use crate::routes::{deleted, error_response};
use crate::services::team as team_service;
use crate::uploads::UploadStorage;

#[get("/team")]
pub async fn list_team_members(
    query: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match team_service::list_team_members(repo.get_ref(), query.lang) {
        Ok(members) => HttpResponse::Ok().json(members),
        Err(err) => error_response(err),
    }
}

#[post("/team")]
pub async fn create_team_member(
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
    MultipartForm(form): MultipartForm<TeamMemberForm>,
) -> impl Responder {
    let payload = match TeamMemberPayload::try_from(form) {
        Ok(payload) => payload,
        Err(err) => return error_response(err.into()),
    };

    match team_service::create_team_member(repo.get_ref(), storage.get_ref(), payload) {
        Ok(member) => HttpResponse::Created().json(member),
        Err(err) => error_response(err),
    }
}

#[put("/team/{id}")]
pub async fn update_team_member(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
    MultipartForm(form): MultipartForm<TeamMemberForm>,
) -> impl Responder {
    let payload = match TeamMemberPayload::try_from(form) {
        Ok(payload) => payload,
        Err(err) => return error_response(err.into()),
    };

    match team_service::update_team_member(
        repo.get_ref(),
        storage.get_ref(),
        id.into_inner(),
        payload,
    ) {
        Ok(member) => HttpResponse::Ok().json(member),
        Err(err) => error_response(err),
    }
}

#[delete("/team/{id}")]
pub async fn delete_team_member(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
) -> impl Responder {
    match team_service::delete_team_member(repo.get_ref(), storage.get_ref(), id.into_inner()) {
        Ok(()) => deleted("Team member deleted"),
        Err(err) => error_response(err),
    }
}
