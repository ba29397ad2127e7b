use std::str::FromStr;

use diesel::prelude::*;

use crate::domain::service::{
    NewService as DomainNewService, Service as DomainService, UpdateService as DomainUpdateService,
};
use crate::domain::types::{Language, ServiceId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::services)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Service {
    pub id: i32,
    pub lang: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub sort_order: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::services)]
pub struct NewService<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub icon: Option<&'a str>,
    pub sort_order: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::services)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateService<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub icon: Option<&'a str>,
    pub sort_order: i32,
}

impl TryFrom<Service> for DomainService {
    type Error = TypeConstraintError;

    fn try_from(value: Service) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ServiceId::new(value.id)?,
            lang: Language::from_str(&value.lang)?,
            title: value.title,
            description: value.description,
            icon: value.icon,
            sort_order: value.sort_order,
        })
    }
}

impl<'a> From<&'a DomainNewService> for NewService<'a> {
    fn from(value: &'a DomainNewService) -> Self {
        Self {
            lang: value.lang.as_str(),
            title: value.title.as_str(),
            description: value.description.as_str(),
            icon: value.icon.as_deref(),
            sort_order: value.sort_order,
        }
    }
}

impl<'a> From<&'a DomainUpdateService> for UpdateService<'a> {
    fn from(value: &'a DomainUpdateService) -> Self {
        Self {
            title: value.title.as_str(),
            description: value.description.as_str(),
            icon: value.icon.as_deref(),
            sort_order: value.sort_order,
        }
    }
}
