use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::ListQuery;
use crate::forms::blog::{BlogForm, BlogPayload};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{deleted, error_response};
use crate::services::blog as blog_service;
use crate::uploads::UploadStorage;

#[get("/blogs")]
pub async fn list_blogs(
    query: web::Query<ListQuery>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let per_page = query.per_page.unwrap_or(server_config.default_page_size);

    match blog_service::list_blogs(repo.get_ref(), query.lang, query.page, per_page) {
        Ok((total, blogs)) => {
            let mut response = HttpResponse::Ok();
            if query.page.is_some() {
                response.insert_header(("X-Total-Count", total.to_string()));
            }
            response.json(blogs)
        }
        Err(err) => error_response(err),
    }
}

#[get("/blogs/{id}")]
pub async fn get_blog(id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match blog_service::get_blog(repo.get_ref(), id.into_inner()) {
        Ok(blog) => HttpResponse::Ok().json(blog),
        Err(err) => error_response(err),
    }
}

#[post("/blogs")]
pub async fn create_blog(
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
    MultipartForm(form): MultipartForm<BlogForm>,
) -> impl Responder {
    let payload = match BlogPayload::try_from(form) {
        Ok(payload) => payload,
        Err(err) => return error_response(err.into()),
    };

    match blog_service::create_blog(repo.get_ref(), storage.get_ref(), payload) {
        Ok(blog) => HttpResponse::Created().json(blog),
        Err(err) => error_response(err),
    }
}

#[put("/blogs/{id}")]
pub async fn update_blog(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
    MultipartForm(form): MultipartForm<BlogForm>,
) -> impl Responder {
    let payload = match BlogPayload::try_from(form) {
        Ok(payload) => payload,
        Err(err) => return error_response(err.into()),
    };

    match blog_service::update_blog(repo.get_ref(), storage.get_ref(), id.into_inner(), payload) {
        Ok(blog) => HttpResponse::Ok().json(blog),
        Err(err) => error_response(err),
    }
}

#[delete("/blogs/{id}")]
pub async fn delete_blog(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    storage: web::Data<UploadStorage>,
) -> impl Responder {
    match blog_service::delete_blog(repo.get_ref(), storage.get_ref(), id.into_inner()) {
        Ok(()) => deleted("Blog deleted"),
        Err(err) => error_response(err),
    }
}
