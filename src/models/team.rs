//! Diesel models for team members and their social links.

use std::str::FromStr;

use diesel::prelude::*;

use crate::domain::team::{
    NewTeamMember as DomainNewTeamMember, NewTeamSocial as DomainNewTeamSocial,
    TeamMember as DomainTeamMember, TeamSocial as DomainTeamSocial,
    UpdateTeamMember as DomainUpdateTeamMember,
};
use crate::domain::types::{Language, TeamMemberId, TeamSocialId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::team)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TeamMember {
    pub id: i32,
    pub lang: String,
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(TeamMember, foreign_key = team_id))]
#[diesel(table_name = crate::schema::team_socials)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TeamSocial {
    pub id: i32,
    pub team_id: i32,
    pub platform: String,
    pub url: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::team)]
pub struct NewTeamMember<'a> {
    pub lang: &'a str,
    pub name: &'a str,
    pub position: &'a str,
    pub bio: Option<&'a str>,
    pub photo: Option<&'a str>,
    pub sort_order: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::team)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateTeamMember<'a> {
    pub name: &'a str,
    pub position: &'a str,
    pub bio: Option<&'a str>,
    pub sort_order: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::team_socials)]
pub struct NewTeamSocial<'a> {
    pub team_id: i32,
    pub platform: &'a str,
    pub url: &'a str,
}

impl<'a> From<&'a DomainNewTeamMember> for NewTeamMember<'a> {
    fn from(value: &'a DomainNewTeamMember) -> Self {
        Self {
            lang: value.lang.as_str(),
            name: value.name.as_str(),
            position: value.position.as_str(),
            bio: value.bio.as_deref(),
            photo: value.photo.as_deref(),
            sort_order: value.sort_order,
        }
    }
}

impl<'a> From<&'a DomainUpdateTeamMember> for UpdateTeamMember<'a> {
    fn from(value: &'a DomainUpdateTeamMember) -> Self {
        Self {
            name: value.name.as_str(),
            position: value.position.as_str(),
            bio: value.bio.as_deref(),
            sort_order: value.sort_order,
        }
    }
}

impl<'a> NewTeamSocial<'a> {
    pub fn for_member(team_id: i32, social: &'a DomainNewTeamSocial) -> Self {
        Self {
            team_id,
            platform: social.platform.as_str(),
            url: social.url.as_str(),
        }
    }
}

impl TryFrom<TeamSocial> for DomainTeamSocial {
    type Error = TypeConstraintError;

    fn try_from(value: TeamSocial) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TeamSocialId::new(value.id)?,
            platform: value.platform,
            url: value.url,
        })
    }
}

impl TeamMember {
    /// Combines the member with its social links.
    pub fn into_domain(
        self,
        socials: Vec<TeamSocial>,
    ) -> Result<DomainTeamMember, TypeConstraintError> {
        Ok(DomainTeamMember {
            id: TeamMemberId::new(self.id)?,
            lang: Language::from_str(&self.lang)?,
            name: self.name,
            position: self.position,
            bio: self.bio,
            photo: self.photo,
            sort_order: self.sort_order,
            socials: socials
                .into_iter()
                .map(DomainTeamSocial::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}
