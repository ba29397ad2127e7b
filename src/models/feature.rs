//! Diesel models for feature tabs and their item lines.

use std::str::FromStr;

use diesel::prelude::*;

use crate::domain::feature::{
    FeatureItem as DomainFeatureItem, FeatureSection as DomainFeatureSection,
    NewFeatureItem as DomainNewFeatureItem, NewFeatureSection as DomainNewFeatureSection,
    UpdateFeatureSection as DomainUpdateFeatureSection,
};
use crate::domain::types::{FeatureItemId, FeatureSectionId, Language, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::features_sections)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FeatureSection {
    pub id: i32,
    pub lang: String,
    pub title: String,
    pub description: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(FeatureSection, foreign_key = section_id))]
#[diesel(table_name = crate::schema::features_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FeatureItem {
    pub id: i32,
    pub section_id: i32,
    pub content: String,
    pub sort_order: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::features_sections)]
pub struct NewFeatureSection<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub sort_order: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::features_sections)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateFeatureSection<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub sort_order: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::features_items)]
pub struct NewFeatureItem<'a> {
    pub section_id: i32,
    pub content: &'a str,
    pub sort_order: i32,
}

impl<'a> From<&'a DomainNewFeatureSection> for NewFeatureSection<'a> {
    fn from(value: &'a DomainNewFeatureSection) -> Self {
        Self {
            lang: value.lang.as_str(),
            title: value.title.as_str(),
            description: value.description.as_deref(),
            sort_order: value.sort_order,
        }
    }
}

impl<'a> From<&'a DomainUpdateFeatureSection> for UpdateFeatureSection<'a> {
    fn from(value: &'a DomainUpdateFeatureSection) -> Self {
        Self {
            title: value.title.as_str(),
            description: value.description.as_deref(),
            sort_order: value.sort_order,
        }
    }
}

impl<'a> NewFeatureItem<'a> {
    pub fn for_section(section_id: i32, item: &'a DomainNewFeatureItem) -> Self {
        Self {
            section_id,
            content: item.content.as_str(),
            sort_order: item.sort_order,
        }
    }
}

impl TryFrom<FeatureItem> for DomainFeatureItem {
    type Error = TypeConstraintError;

    fn try_from(value: FeatureItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: FeatureItemId::new(value.id)?,
            section_id: FeatureSectionId::new(value.section_id)?,
            content: value.content,
            sort_order: value.sort_order,
        })
    }
}

impl FeatureSection {
    /// Combines the section with its already ordered items.
    pub fn into_domain(
        self,
        items: Vec<FeatureItem>,
    ) -> Result<DomainFeatureSection, TypeConstraintError> {
        Ok(DomainFeatureSection {
            id: FeatureSectionId::new(self.id)?,
            lang: Language::from_str(&self.lang)?,
            title: self.title,
            description: self.description,
            sort_order: self.sort_order,
            items: items
                .into_iter()
                .map(DomainFeatureItem::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}
