use serde::Deserialize;
use validator::Validate;

use crate::domain::header_link::{NewHeaderLink, UpdateHeaderLink};
use crate::domain::types::{Language, LinkTarget, PlainText};
use crate::forms::{FormError, required};

/// JSON body for creating or updating a navigation link. `lang` is ignored on update.
#[derive(Debug, Deserialize, Validate)]
pub struct HeaderLinkForm {
    #[serde(default)]
    pub lang: Language,
    #[validate(length(min = 1))]
    pub label: String,
    #[validate(length(min = 1))]
    pub url: String,
    #[serde(default)]
    pub sort_order: i32,
}

impl TryFrom<HeaderLinkForm> for NewHeaderLink {
    type Error = FormError;

    fn try_from(form: HeaderLinkForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            lang: form.lang,
            label: required("label", form.label, PlainText::new)?,
            url: required("url", form.url, LinkTarget::new)?,
            sort_order: form.sort_order,
        })
    }
}

impl TryFrom<HeaderLinkForm> for UpdateHeaderLink {
    type Error = FormError;

    fn try_from(form: HeaderLinkForm) -> Result<Self, Self::Error> {
        let link = NewHeaderLink::try_from(form)?;
        Ok(Self {
            label: link.label,
            url: link.url,
            sort_order: link.sort_order,
        })
    }
}
