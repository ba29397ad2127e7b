//! Query strings and response bodies of the site API.

use serde::{Deserialize, Serialize};

use crate::domain::types::Language;

/// `?lang=` accepted by every localized endpoint. Missing selects Arabic.
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    #[serde(default)]
    pub lang: Language,
}

/// Query parameters of the paginated blog and project lists.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub lang: Language,
    /// Enables pagination when present.
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// `{"message": ...}` body used for deletions and errors.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
