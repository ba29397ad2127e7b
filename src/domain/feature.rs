//! Tabbed feature lists: each section is a tab holding short item lines.

use serde::{Deserialize, Serialize};

use crate::domain::types::{FeatureItemId, FeatureSectionId, Language, PlainText, Title};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FeatureSection {
    pub id: FeatureSectionId,
    pub lang: Language,
    pub title: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub items: Vec<FeatureItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FeatureItem {
    pub id: FeatureItemId,
    pub section_id: FeatureSectionId,
    pub content: String,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewFeatureSection {
    pub lang: Language,
    pub title: Title,
    pub description: Option<String>,
    pub sort_order: i32,
    pub items: Vec<NewFeatureItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateFeatureSection {
    pub title: Title,
    pub description: Option<String>,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewFeatureItem {
    pub content: PlainText,
    pub sort_order: i32,
}
