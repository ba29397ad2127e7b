use serde::Deserialize;
use validator::Validate;

use crate::domain::contact::NewContact;
use crate::domain::types::{ContactEmail, PersonName, RichText, optional_text};
use crate::forms::{FormError, required};

#[derive(Debug, Deserialize, Validate)]
/// Contact form submitted from the public site.
pub struct ContactForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
}

impl TryFrom<ContactForm> for NewContact {
    type Error = FormError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            name: required("name", form.name, PersonName::new)?,
            email: ContactEmail::new(form.email).map_err(|_| FormError::InvalidEmail)?,
            phone: optional_text(form.phone),
            subject: optional_text(form.subject),
            message: required("message", form.message, RichText::new)?,
        })
    }
}
