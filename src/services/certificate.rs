use crate::domain::certificate::Certificate;
use crate::domain::types::{CertificateId, Language};
use crate::forms::FormError;
use crate::forms::certificate::CertificatePayload;
use crate::repository::{CertificateReader, CertificateWriter};
use crate::services::{ServiceError, ServiceResult, persist_with_uploads};
use crate::uploads::UploadStorage;

pub fn list_certificates<R>(repo: &R, lang: Language) -> ServiceResult<Vec<Certificate>>
where
    R: CertificateReader + ?Sized,
{
    Ok(repo.list_certificates(lang)?)
}

/// Creates a certificate; the scan image is mandatory.
pub fn create_certificate<R>(
    repo: &R,
    storage: &UploadStorage,
    payload: CertificatePayload,
) -> ServiceResult<Certificate>
where
    R: CertificateWriter + ?Sized,
{
    let image = payload.image.ok_or(FormError::Required("image"))?;
    let path = storage.store(image)?;
    let new_certificate = payload.fields.into_new(path.clone());

    persist_with_uploads(storage, &[path], || {
        repo.create_certificate(&new_certificate)
    })
}

pub fn update_certificate<R>(
    repo: &R,
    storage: &UploadStorage,
    id: i32,
    payload: CertificatePayload,
) -> ServiceResult<Certificate>
where
    R: CertificateReader + CertificateWriter + ?Sized,
{
    let id = CertificateId::new(id)?;
    let existing = repo
        .get_certificate_by_id(id)?
        .ok_or(ServiceError::NotFound)?;

    let image = payload.image.map(|image| storage.store(image)).transpose()?;
    let stored: Vec<String> = image.iter().cloned().collect();
    let updates = payload.fields.into_update(image);

    let certificate = persist_with_uploads(storage, &stored, || {
        repo.update_certificate(id, &updates)
    })?;

    if updates.image.is_some() {
        storage.remove(&existing.image);
    }

    Ok(certificate)
}

pub fn delete_certificate<R>(repo: &R, storage: &UploadStorage, id: i32) -> ServiceResult<()>
where
    R: CertificateReader + CertificateWriter + ?Sized,
{
    let id = CertificateId::new(id)?;
    let existing = repo
        .get_certificate_by_id(id)?
        .ok_or(ServiceError::NotFound)?;

    repo.delete_certificate(id)?;
    storage.remove(&existing.image);

    Ok(())
}
