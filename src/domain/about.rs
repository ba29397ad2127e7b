//! "About us" section: one record per language plus ordered text blocks.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AboutBlockId, AboutId, Language, PlainText, Title};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct About {
    pub id: AboutId,
    pub lang: Language,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub image: Option<String>,
    pub blocks: Vec<AboutBlock>,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AboutBlock {
    pub id: AboutBlockId,
    pub title: String,
    pub content: String,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewAboutBlock {
    pub title: Title,
    pub content: PlainText,
    pub sort_order: i32,
}

/// Upsert payload for the about record of a language.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveAbout {
    pub lang: Language,
    pub title: Title,
    pub subtitle: Option<String>,
    pub description: PlainText,
    /// New image path; `None` keeps the stored one.
    pub image: Option<String>,
    /// Replacement block list; `None` keeps the stored blocks.
    pub blocks: Option<Vec<NewAboutBlock>>,
}
