use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::contact::ContactForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::contact as contact_service;

#[get("/contacts")]
pub async fn list_contacts(repo: web::Data<DieselRepository>) -> impl Responder {
    match contact_service::list_contacts(repo.get_ref()) {
        Ok(contacts) => HttpResponse::Ok().json(contacts),
        Err(err) => error_response(err),
    }
}

#[post("/contacts")]
pub async fn create_contact(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ContactForm>,
) -> impl Responder {
    match contact_service::create_contact(repo.get_ref(), form) {
        Ok(contact) => HttpResponse::Created().json(contact),
        Err(err) => error_response(err),
    }
}
