use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};

use crate::domain::blog::{NewBlog, UpdateBlog};
use crate::domain::types::{Language, RichText, Title};
use crate::forms::{FormError, gallery, image, language, required, text};
use crate::uploads::UploadedImage;

/// Multipart body of `POST /api/blogs` and `PUT /api/blogs/{id}`.
#[derive(MultipartForm)]
pub struct BlogForm {
    pub lang: Option<Text<String>>,
    pub title: Text<String>,
    pub content: Text<String>,
    pub excerpt: Option<Text<String>>,
    pub author: Option<Text<String>>,
    pub image: Option<TempFile>,
    pub additional_images: Vec<TempFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogFields {
    pub lang: Language,
    pub title: Title,
    pub content: RichText,
    pub excerpt: Option<String>,
    pub author: Option<String>,
}

pub struct BlogPayload {
    pub fields: BlogFields,
    pub image: Option<UploadedImage>,
    pub additional_images: Vec<UploadedImage>,
}

impl TryFrom<BlogForm> for BlogPayload {
    type Error = FormError;

    fn try_from(form: BlogForm) -> Result<Self, Self::Error> {
        Ok(Self {
            fields: BlogFields {
                lang: language(form.lang)?,
                title: required("title", form.title.into_inner(), Title::new)?,
                content: required("content", form.content.into_inner(), RichText::new)?,
                excerpt: text(form.excerpt),
                author: text(form.author),
            },
            image: image(form.image),
            additional_images: gallery("additional_images", form.additional_images)?,
        })
    }
}

impl BlogFields {
    pub fn into_new(self, image: Option<String>, additional_images: Vec<String>) -> NewBlog {
        NewBlog {
            lang: self.lang,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            author: self.author,
            image,
            additional_images,
        }
    }

    pub fn into_update(
        self,
        image: Option<String>,
        additional_images: Option<Vec<String>>,
    ) -> UpdateBlog {
        UpdateBlog {
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            author: self.author,
            image,
            additional_images,
        }
    }
}
