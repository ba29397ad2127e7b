use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};

use crate::domain::certificate::{NewCertificate, UpdateCertificate};
use crate::domain::types::{Language, Title};
use crate::forms::{FormError, image, language, required, text};
use crate::uploads::UploadedImage;

#[derive(MultipartForm)]
pub struct CertificateForm {
    pub lang: Option<Text<String>>,
    pub title: Text<String>,
    pub issuer: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub sort_order: Option<Text<i32>>,
    pub image: Option<TempFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificateFields {
    pub lang: Language,
    pub title: Title,
    pub issuer: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
}

pub struct CertificatePayload {
    pub fields: CertificateFields,
    pub image: Option<UploadedImage>,
}

impl TryFrom<CertificateForm> for CertificatePayload {
    type Error = FormError;

    fn try_from(form: CertificateForm) -> Result<Self, Self::Error> {
        Ok(Self {
            fields: CertificateFields {
                lang: language(form.lang)?,
                title: required("title", form.title.into_inner(), Title::new)?,
                issuer: text(form.issuer),
                description: text(form.description),
                sort_order: form.sort_order.map(Text::into_inner).unwrap_or_default(),
            },
            image: image(form.image),
        })
    }
}

impl CertificateFields {
    pub fn into_new(self, image: String) -> NewCertificate {
        NewCertificate {
            lang: self.lang,
            title: self.title,
            issuer: self.issuer,
            description: self.description,
            image,
            sort_order: self.sort_order,
        }
    }

    pub fn into_update(self, image: Option<String>) -> UpdateCertificate {
        UpdateCertificate {
            title: self.title,
            issuer: self.issuer,
            description: self.description,
            image,
            sort_order: self.sort_order,
        }
    }
}
