//! Services for portfolio projects and the projects page background.

use crate::domain::project::{Project, ProjectsBackground};
use crate::domain::types::{Language, ProjectId};
use crate::forms::project::ProjectPayload;
use crate::repository::{ProjectReader, ProjectWriter};
use crate::services::{
    ServiceError, ServiceResult, content_query, persist_with_uploads, store_images,
};
use crate::uploads::{UploadStorage, UploadedImage};

pub fn list_projects<R>(
    repo: &R,
    lang: Language,
    page: Option<usize>,
    per_page: usize,
) -> ServiceResult<(usize, Vec<Project>)>
where
    R: ProjectReader + ?Sized,
{
    let query = content_query(lang, page, per_page)?;
    Ok(repo.list_projects(query)?)
}

pub fn get_project<R>(repo: &R, id: i32) -> ServiceResult<Project>
where
    R: ProjectReader + ?Sized,
{
    repo.get_project_by_id(ProjectId::new(id)?)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_project<R>(
    repo: &R,
    storage: &UploadStorage,
    payload: ProjectPayload,
) -> ServiceResult<Project>
where
    R: ProjectWriter + ?Sized,
{
    let stored = store_images(storage, payload.image, payload.additional_images)?;
    let paths = stored.all();
    let new_project = payload.fields.into_new(stored.image, stored.gallery);

    persist_with_uploads(storage, &paths, || repo.create_project(&new_project))
}

pub fn update_project<R>(
    repo: &R,
    storage: &UploadStorage,
    id: i32,
    payload: ProjectPayload,
) -> ServiceResult<Project>
where
    R: ProjectReader + ProjectWriter + ?Sized,
{
    let id = ProjectId::new(id)?;
    let existing = repo
        .get_project_by_id(id)?
        .ok_or(ServiceError::NotFound)?;

    let stored = store_images(storage, payload.image, payload.additional_images)?;
    let paths = stored.all();
    let gallery = (!stored.gallery.is_empty()).then_some(stored.gallery);
    let updates = payload.fields.into_update(stored.image, gallery);

    let project = persist_with_uploads(storage, &paths, || repo.update_project(id, &updates))?;

    if updates.image.is_some() {
        if let Some(old) = &existing.image {
            storage.remove(old);
        }
    }
    if updates.additional_images.is_some() {
        storage.remove_all(&existing.additional_images);
    }

    Ok(project)
}

pub fn delete_project<R>(repo: &R, storage: &UploadStorage, id: i32) -> ServiceResult<()>
where
    R: ProjectReader + ProjectWriter + ?Sized,
{
    let id = ProjectId::new(id)?;
    let existing = repo
        .get_project_by_id(id)?
        .ok_or(ServiceError::NotFound)?;

    repo.delete_project(id)?;
    storage.remove_all(&existing.upload_paths());

    Ok(())
}

pub fn get_projects_background<R>(repo: &R) -> ServiceResult<ProjectsBackground>
where
    R: ProjectReader + ?Sized,
{
    Ok(repo.get_projects_background()?)
}

/// Replaces the background image, deleting the previous file.
pub fn set_projects_background<R>(
    repo: &R,
    storage: &UploadStorage,
    image: UploadedImage,
) -> ServiceResult<ProjectsBackground>
where
    R: ProjectReader + ProjectWriter + ?Sized,
{
    let previous = repo.get_projects_background()?;
    let path = storage.store(image)?;

    let background = persist_with_uploads(storage, &[path.clone()], || {
        repo.set_projects_background(&path)
    })?;

    if let Some(old) = previous.image {
        storage.remove(&old);
    }

    Ok(background)
}
