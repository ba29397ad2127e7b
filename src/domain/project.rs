use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Language, ProjectId, RichText, Title};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub lang: Language,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub client: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub additional_images: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Project {
    /// Every upload referenced by the project: cover first, then the gallery.
    pub fn upload_paths(&self) -> Vec<String> {
        self.image
            .iter()
            .chain(self.additional_images.iter())
            .cloned()
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewProject {
    pub lang: Language,
    pub title: Title,
    pub description: RichText,
    pub category: Option<String>,
    pub client: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub additional_images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateProject {
    pub title: Title,
    pub description: RichText,
    pub category: Option<String>,
    pub client: Option<String>,
    pub location: Option<String>,
    /// New cover path; `None` keeps the stored one.
    pub image: Option<String>,
    /// New gallery; `None` keeps the stored one.
    pub additional_images: Option<Vec<String>>,
}

/// Background image of the projects page. Never missing: an unset
/// background serializes with `image: null`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectsBackground {
    pub image: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
}
