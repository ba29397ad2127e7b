use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ContactEmail, ContactId, PersonName, RichText};

/// A message left through the public contact form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewContact {
    pub name: PersonName,
    pub email: ContactEmail,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: RichText,
}
