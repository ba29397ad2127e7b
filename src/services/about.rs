//! Services for the about-us section.

use crate::domain::about::About;
use crate::domain::types::Language;
use crate::forms::about::SaveAboutPayload;
use crate::repository::{AboutReader, AboutWriter};
use crate::services::{ServiceError, ServiceResult, persist_with_uploads};
use crate::uploads::UploadStorage;

pub fn get_about<R>(repo: &R, lang: Language) -> ServiceResult<About>
where
    R: AboutReader + ?Sized,
{
    repo.get_about(lang)?.ok_or(ServiceError::NotFound)
}

/// Creates or updates the about record of the payload language.
///
/// A new image replaces the stored one; the previous file is deleted once the
/// record is saved.
pub fn save_about<R>(repo: &R, storage: &UploadStorage, payload: SaveAboutPayload) -> ServiceResult<About>
where
    R: AboutReader + AboutWriter + ?Sized,
{
    let SaveAboutPayload { mut about, image } = payload;
    let previous = repo.get_about(about.lang)?;

    about.image = image.map(|image| storage.store(image)).transpose()?;
    let stored: Vec<String> = about.image.iter().cloned().collect();

    let saved = persist_with_uploads(storage, &stored, || repo.save_about(&about))?;

    if about.image.is_some() {
        if let Some(old) = previous.and_then(|previous| previous.image) {
            storage.remove(&old);
        }
    }

    Ok(saved)
}
