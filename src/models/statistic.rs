use std::str::FromStr;

use diesel::prelude::*;

use crate::domain::statistic::{
    NewStatistic as DomainNewStatistic, Statistic as DomainStatistic,
    UpdateStatistic as DomainUpdateStatistic,
};
use crate::domain::types::{Language, StatisticId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::statistics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Statistic {
    pub id: i32,
    pub lang: String,
    pub label: String,
    pub value: i32,
    pub suffix: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::statistics)]
pub struct NewStatistic<'a> {
    pub lang: &'a str,
    pub label: &'a str,
    pub value: i32,
    pub suffix: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub sort_order: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::statistics)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateStatistic<'a> {
    pub label: &'a str,
    pub value: i32,
    pub suffix: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub sort_order: i32,
}

impl TryFrom<Statistic> for DomainStatistic {
    type Error = TypeConstraintError;

    fn try_from(value: Statistic) -> Result<Self, Self::Error> {
        Ok(Self {
            id: StatisticId::new(value.id)?,
            lang: Language::from_str(&value.lang)?,
            label: value.label,
            value: value.value,
            suffix: value.suffix,
            icon: value.icon,
            sort_order: value.sort_order,
        })
    }
}

impl<'a> From<&'a DomainNewStatistic> for NewStatistic<'a> {
    fn from(value: &'a DomainNewStatistic) -> Self {
        Self {
            lang: value.lang.as_str(),
            label: value.label.as_str(),
            value: value.value,
            suffix: value.suffix.as_deref(),
            icon: value.icon.as_deref(),
            sort_order: value.sort_order,
        }
    }
}

impl<'a> From<&'a DomainUpdateStatistic> for UpdateStatistic<'a> {
    fn from(value: &'a DomainUpdateStatistic) -> Self {
        Self {
            label: value.label.as_str(),
            value: value.value,
            suffix: value.suffix.as_deref(),
            icon: value.icon.as_deref(),
            sort_order: value.sort_order,
        }
    }
}
