use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::project::{
    NewProject as DomainNewProject, Project as DomainProject,
    ProjectsBackground as DomainProjectsBackground, UpdateProject as DomainUpdateProject,
};
use crate::domain::types::{Language, ProjectId, TypeConstraintError};
use crate::models::{decode_paths, encode_paths};

/// Primary key of the single `projects_background` row.
pub const PROJECTS_BACKGROUND_ID: i32 = 1;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Project {
    pub id: i32,
    pub lang: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub client: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub additional_images: String, // JSON array of upload paths
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::projects)]
pub struct NewProject<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub category: Option<&'a str>,
    pub client: Option<&'a str>,
    pub location: Option<&'a str>,
    pub image: Option<&'a str>,
    pub additional_images: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProject<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: Option<&'a str>,
    pub client: Option<&'a str>,
    pub location: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::projects_background)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProjectsBackground {
    pub id: i32,
    pub image: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Project> for DomainProject {
    type Error = TypeConstraintError;

    fn try_from(project: Project) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProjectId::new(project.id)?,
            lang: Language::from_str(&project.lang)?,
            title: project.title,
            description: project.description,
            category: project.category,
            client: project.client,
            location: project.location,
            image: project.image,
            additional_images: decode_paths(&project.additional_images),
            created_at: project.created_at,
            updated_at: project.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewProject> for NewProject<'a> {
    fn from(project: &'a DomainNewProject) -> Self {
        Self {
            lang: project.lang.as_str(),
            title: project.title.as_str(),
            description: project.description.as_str(),
            category: project.category.as_deref(),
            client: project.client.as_deref(),
            location: project.location.as_deref(),
            image: project.image.as_deref(),
            additional_images: encode_paths(&project.additional_images),
        }
    }
}

impl<'a> From<&'a DomainUpdateProject> for UpdateProject<'a> {
    fn from(project: &'a DomainUpdateProject) -> Self {
        Self {
            title: project.title.as_str(),
            description: project.description.as_str(),
            category: project.category.as_deref(),
            client: project.client.as_deref(),
            location: project.location.as_deref(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<ProjectsBackground> for DomainProjectsBackground {
    fn from(value: ProjectsBackground) -> Self {
        Self {
            image: value.image,
            updated_at: Some(value.updated_at),
        }
    }
}
