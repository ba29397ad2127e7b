use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CertificateId, Language, Title};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Certificate {
    pub id: CertificateId,
    pub lang: Language,
    pub title: String,
    pub issuer: Option<String>,
    pub description: Option<String>,
    pub image: String,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewCertificate {
    pub lang: Language,
    pub title: Title,
    pub issuer: Option<String>,
    pub description: Option<String>,
    pub image: String,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateCertificate {
    pub title: Title,
    pub issuer: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub sort_order: i32,
}
