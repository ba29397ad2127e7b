//! Services for the company intro hero block and its image gallery.

use crate::domain::company_intro::CompanyIntro;
use crate::domain::types::Language;
use crate::forms::company_intro::SaveCompanyIntroForm;
use crate::repository::{CompanyIntroReader, CompanyIntroWriter};
use crate::services::{ServiceError, ServiceResult, persist_with_uploads};
use crate::uploads::{UploadStorage, UploadedImage};

pub fn get_company_intro<R>(repo: &R, lang: Language) -> ServiceResult<CompanyIntro>
where
    R: CompanyIntroReader + ?Sized,
{
    repo.get_company_intro(lang)?.ok_or(ServiceError::NotFound)
}

/// Creates or updates the intro text of `lang`, keeping its images.
pub fn save_company_intro<R>(
    repo: &R,
    lang: Language,
    form: SaveCompanyIntroForm,
) -> ServiceResult<CompanyIntro>
where
    R: CompanyIntroWriter + ?Sized,
{
    let intro = form.into_domain(lang)?;
    Ok(repo.save_company_intro(&intro)?)
}

/// Appends an image to the gallery of an existing intro.
pub fn add_company_intro_image<R>(
    repo: &R,
    storage: &UploadStorage,
    lang: Language,
    image: UploadedImage,
) -> ServiceResult<CompanyIntro>
where
    R: CompanyIntroReader + CompanyIntroWriter + ?Sized,
{
    repo.get_company_intro(lang)?
        .ok_or(ServiceError::NotFound)?;

    let path = storage.store(image)?;

    persist_with_uploads(storage, &[path.clone()], || {
        repo.append_company_intro_image(lang, &path)
    })
}

/// Removes the image at the zero-based `index` and deletes its file.
pub fn remove_company_intro_image<R>(
    repo: &R,
    storage: &UploadStorage,
    lang: Language,
    index: usize,
) -> ServiceResult<CompanyIntro>
where
    R: CompanyIntroWriter + ?Sized,
{
    let (updated, removed) = repo.remove_company_intro_image(lang, index)?;
    storage.remove(&removed);

    Ok(updated)
}
