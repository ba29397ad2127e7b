//! Hero block shown at the top of the landing page.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CompanyIntroId, Language, PlainText, Title};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompanyIntro {
    pub id: CompanyIntroId,
    pub lang: Language,
    pub headline: String,
    pub subheadline: Option<String>,
    pub description: String,
    pub images: Vec<String>,
    pub updated_at: NaiveDateTime,
}

impl CompanyIntro {
    /// Gallery with `path` appended.
    pub fn images_with(&self, path: String) -> Vec<String> {
        let mut images = self.images.clone();
        images.push(path);
        images
    }

    /// Splits the gallery into the remaining images and the removed one.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn images_without(&self, index: usize) -> Option<(Vec<String>, String)> {
        if index >= self.images.len() {
            return None;
        }
        let mut images = self.images.clone();
        let removed = images.remove(index);
        Some((images, removed))
    }
}

/// Text part of the intro; the gallery is managed separately.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveCompanyIntro {
    pub lang: Language,
    pub headline: Title,
    pub subheadline: Option<String>,
    pub description: PlainText,
}
