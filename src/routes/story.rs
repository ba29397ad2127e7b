use actix_web::{HttpResponse, Responder, get, post, put, web};

use crate::forms::story::StoryForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::story as story_service;

#[get("/story")]
pub async fn list_stories(repo: web::Data<DieselRepository>) -> impl Responder {
    match story_service::list_stories(repo.get_ref()) {
        Ok(stories) => HttpResponse::Ok().json(stories),
        Err(err) => error_response(err),
    }
}

#[post("/story")]
pub async fn create_story(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<StoryForm>,
) -> impl Responder {
    match story_service::create_story(repo.get_ref(), form) {
        Ok(story) => HttpResponse::Created().json(story),
        Err(err) => error_response(err),
    }
}

#[put("/story/{id}")]
pub async fn update_story(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<StoryForm>,
) -> impl Responder {
    match story_service::update_story(repo.get_ref(), id.into_inner(), form) {
        Ok(story) => HttpResponse::Ok().json(story),
        Err(err) => error_response(err),
    }
}
