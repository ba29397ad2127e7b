//! Business rules shared by the HTTP handlers.
//!
//! Every function is generic over the repository traits it needs so it can
//! run against [`crate::repository::DieselRepository`] or a mock.

use thiserror::Error;

use crate::domain::types::Language;
use crate::forms::FormError;
use crate::repository::ContentListQuery;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::uploads::{UploadError, UploadStorage, UploadedImage};

pub mod about;
pub mod blog;
pub mod certificate;
pub mod company_intro;
pub mod contact;
pub mod feature;
pub mod header_link;
pub mod project;
pub mod service;
pub mod statistic;
pub mod story;
pub mod team;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("{0}")]
    TypeConstraint(String),

    #[error("{0}")]
    Upload(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

impl From<UploadError> for ServiceError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::UnsupportedType(_) => ServiceError::Upload(err.to_string()),
            UploadError::Io(_) => ServiceError::Internal(err.to_string()),
        }
    }
}

/// Listing query of blogs and projects. Paginated only when `page` is given;
/// windows beyond what the database can address are rejected.
pub(crate) fn content_query(
    lang: Language,
    page: Option<usize>,
    per_page: usize,
) -> ServiceResult<ContentListQuery> {
    let query = ContentListQuery::new(lang);
    let Some(page) = page else {
        return Ok(query);
    };

    let query = query.paginate(page, per_page.max(1));
    match &query.pagination {
        Some(pagination) if pagination.bounds().is_none() => {
            Err(ServiceError::Form(format!("page {page} is out of range")))
        }
        _ => Ok(query),
    }
}

/// Public paths of a cover image and a gallery stored for one request.
#[derive(Debug, Default)]
pub(crate) struct StoredImages {
    pub image: Option<String>,
    pub gallery: Vec<String>,
}

impl StoredImages {
    pub fn all(&self) -> Vec<String> {
        self.image.iter().chain(self.gallery.iter()).cloned().collect()
    }
}

/// Stores an optional cover image and a gallery, all or nothing.
pub(crate) fn store_images(
    storage: &UploadStorage,
    image: Option<UploadedImage>,
    gallery: Vec<UploadedImage>,
) -> ServiceResult<StoredImages> {
    let image = image.map(|image| storage.store(image)).transpose()?;
    let gallery = match storage.store_all(gallery) {
        Ok(gallery) => gallery,
        Err(err) => {
            if let Some(path) = &image {
                storage.remove(path);
            }
            return Err(err.into());
        }
    };
    Ok(StoredImages { image, gallery })
}

/// Runs a write referencing freshly stored uploads, removing them when it fails.
pub(crate) fn persist_with_uploads<T, F>(
    storage: &UploadStorage,
    stored: &[String],
    write: F,
) -> ServiceResult<T>
where
    F: FnOnce() -> RepositoryResult<T>,
{
    write().map_err(|err| {
        if !stored.is_empty() {
            log::warn!("Discarding {} upload(s) after failed write: {err}", stored.len());
            storage.remove_all(stored);
        }
        ServiceError::from(err)
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::uploads::{UploadStorage, UploadedImage};

    pub fn png() -> UploadedImage {
        UploadedImage::from_bytes(b"\x89PNG\r\n", Some("picture.png"), Some("image/png")).unwrap()
    }

    /// Stores a file the way an earlier request would have.
    pub fn existing_upload(storage: &UploadStorage) -> String {
        storage.store(png()).unwrap()
    }

    pub fn exists(storage: &UploadStorage, path: &str) -> bool {
        storage.resolve(path).is_some_and(|p| p.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn repository_not_found_maps_to_not_found() {
        assert!(matches!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::DatabaseError("x".into())),
            ServiceError::Repository(_)
        ));
    }

    #[test]
    fn failed_write_discards_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let storage = UploadStorage::new(dir.path());
        let stored = store_images(&storage, Some(png()), vec![png(), png()]).unwrap();
        let paths = stored.all();
        assert_eq!(paths.len(), 3);

        let result: ServiceResult<()> = persist_with_uploads(&storage, &paths, || {
            Err(RepositoryError::ConstraintViolation("boom".into()))
        });

        assert!(matches!(result, Err(ServiceError::Repository(_))));
        assert!(paths.iter().all(|p| !exists(&storage, p)));
    }

    #[test]
    fn rejected_gallery_removes_cover() {
        let dir = tempfile::tempdir().unwrap();
        let storage = UploadStorage::new(dir.path());
        let text = UploadedImage::from_bytes(b"hi", Some("a.txt"), Some("text/plain")).unwrap();

        let result = store_images(&storage, Some(png()), vec![text]);

        assert!(matches!(result, Err(ServiceError::Upload(_))));
        assert!(storage.list().unwrap().is_empty());
    }
}
