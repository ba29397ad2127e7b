use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::story::{
    NewStory as DomainNewStory, Story as DomainStory, UpdateStory as DomainUpdateStory,
};
use crate::domain::types::{StoryId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::story)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Story {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::story)]
pub struct NewStory<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::story)]
pub struct UpdateStory<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Story> for DomainStory {
    type Error = TypeConstraintError;

    fn try_from(value: Story) -> Result<Self, Self::Error> {
        Ok(Self {
            id: StoryId::new(value.id)?,
            title: value.title,
            content: value.content,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewStory> for NewStory<'a> {
    fn from(value: &'a DomainNewStory) -> Self {
        Self {
            title: value.title.as_str(),
            content: value.content.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateStory> for UpdateStory<'a> {
    fn from(value: &'a DomainUpdateStory) -> Self {
        Self {
            title: value.title.as_str(),
            content: value.content.as_str(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
