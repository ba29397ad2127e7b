use serde::Deserialize;
use validator::Validate;

use crate::domain::company_intro::SaveCompanyIntro;
use crate::domain::types::{Language, PlainText, Title, optional_text};
use crate::forms::{FormError, required};

/// JSON body of `PUT /api/company-intro`.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveCompanyIntroForm {
    #[validate(length(min = 1))]
    pub headline: String,
    pub subheadline: Option<String>,
    #[validate(length(min = 1))]
    pub description: String,
}

impl SaveCompanyIntroForm {
    pub fn into_domain(self, lang: Language) -> Result<SaveCompanyIntro, FormError> {
        self.validate()?;
        Ok(SaveCompanyIntro {
            lang,
            headline: required("headline", self.headline, Title::new)?,
            subheadline: optional_text(self.subheadline),
            description: required("description", self.description, PlainText::new)?,
        })
    }
}
