use serde::Deserialize;
use validator::Validate;

use crate::domain::service::{NewService, UpdateService};
use crate::domain::types::{Language, PlainText, Title, optional_text};
use crate::forms::{FormError, required};

/// JSON body for creating or updating a service. `lang` is ignored on update.
#[derive(Debug, Deserialize, Validate)]
pub struct ServiceForm {
    #[serde(default)]
    pub lang: Language,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl TryFrom<ServiceForm> for NewService {
    type Error = FormError;

    fn try_from(form: ServiceForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            lang: form.lang,
            title: required("title", form.title, Title::new)?,
            description: required("description", form.description, PlainText::new)?,
            icon: optional_text(form.icon),
            sort_order: form.sort_order,
        })
    }
}

impl TryFrom<ServiceForm> for UpdateService {
    type Error = FormError;

    fn try_from(form: ServiceForm) -> Result<Self, Self::Error> {
        let service = NewService::try_from(form)?;
        Ok(Self {
            title: service.title,
            description: service.description,
            icon: service.icon,
            sort_order: service.sort_order,
        })
    }
}
