use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::company_intro::{CompanyIntro as DomainCompanyIntro, SaveCompanyIntro};
use crate::domain::types::{CompanyIntroId, Language, TypeConstraintError};
use crate::models::decode_paths;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::company_intro)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CompanyIntro {
    pub id: i32,
    pub lang: String,
    pub headline: String,
    pub subheadline: Option<String>,
    pub description: String,
    pub images: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::company_intro)]
pub struct NewCompanyIntro<'a> {
    pub lang: &'a str,
    pub headline: &'a str,
    pub subheadline: Option<&'a str>,
    pub description: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::company_intro)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateCompanyIntro<'a> {
    pub headline: &'a str,
    pub subheadline: Option<&'a str>,
    pub description: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<CompanyIntro> for DomainCompanyIntro {
    type Error = TypeConstraintError;

    fn try_from(value: CompanyIntro) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CompanyIntroId::new(value.id)?,
            lang: Language::from_str(&value.lang)?,
            headline: value.headline,
            subheadline: value.subheadline,
            description: value.description,
            images: decode_paths(&value.images),
            updated_at: value.updated_at,
        })
    }
}

impl<'a> From<&'a SaveCompanyIntro> for NewCompanyIntro<'a> {
    fn from(value: &'a SaveCompanyIntro) -> Self {
        Self {
            lang: value.lang.as_str(),
            headline: value.headline.as_str(),
            subheadline: value.subheadline.as_deref(),
            description: value.description.as_str(),
        }
    }
}

impl<'a> From<&'a SaveCompanyIntro> for UpdateCompanyIntro<'a> {
    fn from(value: &'a SaveCompanyIntro) -> Self {
        Self {
            headline: value.headline.as_str(),
            subheadline: value.subheadline.as_deref(),
            description: value.description.as_str(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
