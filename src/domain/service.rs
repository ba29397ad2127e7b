use serde::{Deserialize, Serialize};

use crate::domain::types::{Language, PlainText, ServiceId, Title};

/// Service offered by the company, shown as a card on the landing page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: ServiceId,
    pub lang: Language,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewService {
    pub lang: Language,
    pub title: Title,
    pub description: PlainText,
    pub icon: Option<String>,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateService {
    pub title: Title,
    pub description: PlainText,
    pub icon: Option<String>,
    pub sort_order: i32,
}
