use crate::domain::service::{NewService, Service, UpdateService};
use crate::domain::types::{Language, ServiceId};
use crate::forms::service::ServiceForm;
use crate::repository::{ServiceReader, ServiceWriter};
use crate::services::ServiceResult;

pub fn list_services<R>(repo: &R, lang: Language) -> ServiceResult<Vec<Service>>
where
    R: ServiceReader + ?Sized,
{
    Ok(repo.list_services(lang)?)
}

pub fn create_service<R>(repo: &R, form: ServiceForm) -> ServiceResult<Service>
where
    R: ServiceWriter + ?Sized,
{
    let service = NewService::try_from(form)?;
    Ok(repo.create_service(&service)?)
}

pub fn update_service<R>(repo: &R, id: i32, form: ServiceForm) -> ServiceResult<Service>
where
    R: ServiceWriter + ?Sized,
{
    let updates = UpdateService::try_from(form)?;
    Ok(repo.update_service(ServiceId::new(id)?, &updates)?)
}

pub fn delete_service<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ServiceWriter + ?Sized,
{
    Ok(repo.delete_service(ServiceId::new(id)?)?)
}
