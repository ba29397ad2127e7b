use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::certificate::{
    Certificate as DomainCertificate, NewCertificate as DomainNewCertificate,
    UpdateCertificate as DomainUpdateCertificate,
};
use crate::domain::types::{CertificateId, Language, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::certificates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Certificate {
    pub id: i32,
    pub lang: String,
    pub title: String,
    pub issuer: Option<String>,
    pub description: Option<String>,
    pub image: String,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::certificates)]
pub struct NewCertificate<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub issuer: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image: &'a str,
    pub sort_order: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::certificates)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateCertificate<'a> {
    pub title: &'a str,
    pub issuer: Option<&'a str>,
    pub description: Option<&'a str>,
    pub sort_order: i32,
}

impl TryFrom<Certificate> for DomainCertificate {
    type Error = TypeConstraintError;

    fn try_from(value: Certificate) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CertificateId::new(value.id)?,
            lang: Language::from_str(&value.lang)?,
            title: value.title,
            issuer: value.issuer,
            description: value.description,
            image: value.image,
            sort_order: value.sort_order,
            created_at: value.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewCertificate> for NewCertificate<'a> {
    fn from(value: &'a DomainNewCertificate) -> Self {
        Self {
            lang: value.lang.as_str(),
            title: value.title.as_str(),
            issuer: value.issuer.as_deref(),
            description: value.description.as_deref(),
            image: value.image.as_str(),
            sort_order: value.sort_order,
        }
    }
}

impl<'a> From<&'a DomainUpdateCertificate> for UpdateCertificate<'a> {
    fn from(value: &'a DomainUpdateCertificate) -> Self {
        Self {
            title: value.title.as_str(),
            issuer: value.issuer.as_deref(),
            description: value.description.as_deref(),
            sort_order: value.sort_order,
        }
    }
}
