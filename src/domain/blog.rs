use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BlogId, Language, RichText, Title};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Blog {
    pub id: BlogId,
    pub lang: Language,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: Option<String>,
    pub image: Option<String>,
    pub additional_images: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Blog {
    /// Every upload referenced by the post: cover first, then the gallery.
    pub fn upload_paths(&self) -> Vec<String> {
        self.image
            .iter()
            .chain(self.additional_images.iter())
            .cloned()
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewBlog {
    pub lang: Language,
    pub title: Title,
    pub excerpt: Option<String>,
    pub content: RichText,
    pub author: Option<String>,
    pub image: Option<String>,
    pub additional_images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateBlog {
    pub title: Title,
    pub excerpt: Option<String>,
    pub content: RichText,
    pub author: Option<String>,
    /// New cover path; `None` keeps the stored one.
    pub image: Option<String>,
    /// New gallery; `None` keeps the stored one.
    pub additional_images: Option<Vec<String>>,
}
