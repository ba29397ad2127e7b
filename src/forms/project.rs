use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};

use crate::domain::project::{NewProject, UpdateProject};
use crate::domain::types::{Language, RichText, Title};
use crate::forms::{FormError, gallery, image, language, required, text};
use crate::uploads::UploadedImage;

/// Multipart body of `POST /api/projects` and `PUT /api/projects/{id}`.
#[derive(MultipartForm)]
pub struct ProjectForm {
    pub lang: Option<Text<String>>,
    pub title: Text<String>,
    pub description: Text<String>,
    pub category: Option<Text<String>>,
    pub client: Option<Text<String>>,
    pub location: Option<Text<String>>,
    pub image: Option<TempFile>,
    pub additional_images: Vec<TempFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFields {
    pub lang: Language,
    pub title: Title,
    pub description: RichText,
    pub category: Option<String>,
    pub client: Option<String>,
    pub location: Option<String>,
}

pub struct ProjectPayload {
    pub fields: ProjectFields,
    pub image: Option<UploadedImage>,
    pub additional_images: Vec<UploadedImage>,
}

impl TryFrom<ProjectForm> for ProjectPayload {
    type Error = FormError;

    fn try_from(form: ProjectForm) -> Result<Self, Self::Error> {
        Ok(Self {
            fields: ProjectFields {
                lang: language(form.lang)?,
                title: required("title", form.title.into_inner(), Title::new)?,
                description: required("description", form.description.into_inner(), RichText::new)?,
                category: text(form.category),
                client: text(form.client),
                location: text(form.location),
            },
            image: image(form.image),
            additional_images: gallery("additional_images", form.additional_images)?,
        })
    }
}

impl ProjectFields {
    pub fn into_new(self, image: Option<String>, additional_images: Vec<String>) -> NewProject {
        NewProject {
            lang: self.lang,
            title: self.title,
            description: self.description,
            category: self.category,
            client: self.client,
            location: self.location,
            image,
            additional_images,
        }
    }

    pub fn into_update(
        self,
        image: Option<String>,
        additional_images: Option<Vec<String>>,
    ) -> UpdateProject {
        UpdateProject {
            title: self.title,
            description: self.description,
            category: self.category,
            client: self.client,
            location: self.location,
            image,
            additional_images,
        }
    }
}
