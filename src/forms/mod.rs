//! Request payloads accepted by the site API and their conversion into
//! domain inputs.

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::{Language, TypeConstraintError, optional_text};
use crate::uploads::UploadedImage;

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

/// Upper bound for the `additional_images` gallery of blogs and projects.
pub const MAX_GALLERY_IMAGES: usize = 10;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid language: {0}")]
    InvalidLanguage(String),

    #[error("{0} is required")]
    Required(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("invalid JSON in {field}: {message}")]
    InvalidJson { field: &'static str, message: String },

    #[error("at most {max} files are allowed in {field}")]
    TooManyFiles { field: &'static str, max: usize },
}

/// Multipart body carrying a single required image.
#[derive(MultipartForm)]
pub struct ImageForm {
    pub image: TempFile,
}

impl ImageForm {
    pub fn into_image(self) -> Result<UploadedImage, FormError> {
        image(Some(self.image)).ok_or(FormError::Required("image"))
    }
}

/// Builds a constrained value, reporting `field` as missing when it is empty.
pub(crate) fn required<T, F>(field: &'static str, value: String, build: F) -> Result<T, FormError>
where
    F: FnOnce(String) -> Result<T, TypeConstraintError>,
{
    build(value).map_err(|_| FormError::Required(field))
}

/// Trimmed optional multipart text; blank values count as absent.
pub(crate) fn text(field: Option<Text<String>>) -> Option<String> {
    optional_text(field.map(Text::into_inner))
}

/// Language of a multipart body; a missing or blank field selects the default.
pub(crate) fn language(field: Option<Text<String>>) -> Result<Language, FormError> {
    match text(field) {
        Some(code) => code.parse().map_err(|_| FormError::InvalidLanguage(code)),
        None => Ok(Language::default()),
    }
}

/// Browsers send an empty part for an untouched file input.
pub(crate) fn image(file: Option<TempFile>) -> Option<UploadedImage> {
    file.filter(|file| file.size > 0).map(UploadedImage::from)
}

pub(crate) fn gallery(
    field: &'static str,
    files: Vec<TempFile>,
) -> Result<Vec<UploadedImage>, FormError> {
    let images: Vec<UploadedImage> = files.into_iter().filter_map(|f| image(Some(f))).collect();
    if images.len() > MAX_GALLERY_IMAGES {
        return Err(FormError::TooManyFiles {
            field,
            max: MAX_GALLERY_IMAGES,
        });
    }
    Ok(images)
}

/// Parses a JSON document sent inside a multipart text field.
pub(crate) fn json_field<T: DeserializeOwned>(
    field: &'static str,
    value: Option<Text<String>>,
) -> Result<Option<T>, FormError> {
    text(value)
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|err| FormError::InvalidJson {
                field,
                message: err.to_string(),
            })
        })
        .transpose()
}
