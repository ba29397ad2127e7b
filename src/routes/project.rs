use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::ListQuery;
use crate::forms::ImageForm;
use crate::forms::project::{ProjectForm, ProjectPayload};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{deleted, error_response};
use crate::services::project as project_service;
use crate::uploads::UploadStorage;

#[get("/projects")]
pub async fn list_projects(
    query: web::Query<ListQuery>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let per_page = query.per_page.unwrap_or(server_config.default_page_size);

    match project_service::list_projects(repo.get_ref(), query.lang, query.page, per_page) {
        Ok((total, projects)) => {
            let mut response = HttpResponse::Ok();
            if query.page.is_some() {
                response.insert_header(("X-Total-Count", total.to_string()));
            }
            response.json(projects)
        }
        Err(err) => error_response(err),
    }
}

#[get("/projects/{id}")]
pub async fn get_project(id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match project_service::get_project(repo.get_ref(), id.into_inner()) {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(err) => error_response(err),
    }
}

#[post("/projects")]
pub async fn create_project(
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
    MultipartForm(form): MultipartForm<ProjectForm>,
) -> impl Responder {
    let payload = match ProjectPayload::try_from(form) {
        Ok(payload) => payload,
        Err(err) => return error_response(err.into()),
    };

    match project_service::create_project(repo.get_ref(), storage.get_ref(), payload) {
        Ok(project) => HttpResponse::Created().json(project),
        Err(err) => error_response(err),
    }
}

#[put("/projects/{id}")]
pub async fn update_project(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
    MultipartForm(form): MultipartForm<ProjectForm>,
) -> impl Responder {
    let payload = match ProjectPayload::try_from(form) {
        Ok(payload) => payload,
        Err(err) => return error_response(err.into()),
    };

    match project_service::update_project(repo.get_ref(), storage.get_ref(), id.into_inner(), payload) {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(err) => error_response(err),
    }
}

#[delete("/projects/{id}")]
pub async fn delete_project(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
) -> impl Responder {
    match project_service::delete_project(repo.get_ref(), storage.get_ref(), id.into_inner()) {
        Ok(()) => deleted("Project deleted"),
        Err(err) => error_response(err),
    }
}

#[get("/projects/background")]
pub async fn get_projects_background(repo: web::Data<DieselRepository>) -> impl Responder {
    match project_service::get_projects_background(repo.get_ref()) {
        Ok(background) => HttpResponse::Ok().json(background),
        Err(err) => error_response(err),
    }
}

#[put("/projects/background")]
pub async fn set_projects_background(
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
    MultipartForm(form): MultipartForm<ImageForm>,
) -> impl Responder {
    let image = match form.into_image() {
        Ok(image) => image,
        Err(err) => return error_response(err.into()),
    };

    match project_service::set_projects_background(repo.get_ref(), storage.get_ref(), image) {
        Ok(background) => HttpResponse::Ok().json(background),
        Err(err) => error_response(err),
    }
}
