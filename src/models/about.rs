//! Diesel models for the about-us record and its blocks.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::about::{About as DomainAbout, AboutBlock as DomainAboutBlock, NewAboutBlock as DomainNewAboutBlock, SaveAbout};
use crate::domain::types::{AboutBlockId, AboutId, Language, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::about_us)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct About {
    pub id: i32,
    pub lang: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub image: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(About, foreign_key = about_id))]
#[diesel(table_name = crate::schema::about_blocks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AboutBlock {
    pub id: i32,
    pub about_id: i32,
    pub title: String,
    pub content: String,
    pub sort_order: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::about_us)]
pub struct NewAbout<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub description: &'a str,
    pub image: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::about_us)]
#[diesel(treat_none_as_null = true)]
/// Text columns rewritten on every save; the image is updated separately.
pub struct UpdateAbout<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub description: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::about_blocks)]
pub struct NewAboutBlock<'a> {
    pub about_id: i32,
    pub title: &'a str,
    pub content: &'a str,
    pub sort_order: i32,
}

impl<'a> From<&'a SaveAbout> for NewAbout<'a> {
    fn from(value: &'a SaveAbout) -> Self {
        Self {
            lang: value.lang.as_str(),
            title: value.title.as_str(),
            subtitle: value.subtitle.as_deref(),
            description: value.description.as_str(),
            image: value.image.as_deref(),
        }
    }
}

impl<'a> From<&'a SaveAbout> for UpdateAbout<'a> {
    fn from(value: &'a SaveAbout) -> Self {
        Self {
            title: value.title.as_str(),
            subtitle: value.subtitle.as_deref(),
            description: value.description.as_str(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl<'a> NewAboutBlock<'a> {
    pub fn for_about(about_id: i32, block: &'a DomainNewAboutBlock) -> Self {
        Self {
            about_id,
            title: block.title.as_str(),
            content: block.content.as_str(),
            sort_order: block.sort_order,
        }
    }
}

impl TryFrom<AboutBlock> for DomainAboutBlock {
    type Error = TypeConstraintError;

    fn try_from(value: AboutBlock) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AboutBlockId::new(value.id)?,
            title: value.title,
            content: value.content,
            sort_order: value.sort_order,
        })
    }
}

impl About {
    /// Combines the record with its already ordered blocks.
    pub fn into_domain(self, blocks: Vec<AboutBlock>) -> Result<DomainAbout, TypeConstraintError> {
        Ok(DomainAbout {
            id: AboutId::new(self.id)?,
            lang: Language::from_str(&self.lang)?,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            image: self.image,
            blocks: blocks
                .into_iter()
                .map(DomainAboutBlock::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            updated_at: self.updated_at,
        })
    }
}
