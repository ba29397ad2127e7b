use serde::{Deserialize, Serialize};

use crate::domain::types::{Language, PersonName, PlainText, SocialUrl, TeamMemberId, TeamSocialId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub lang: Language,
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub sort_order: i32,
    pub socials: Vec<TeamSocial>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamSocial {
    pub id: TeamSocialId,
    pub platform: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewTeamSocial {
    pub platform: PlainText,
    pub url: SocialUrl,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewTeamMember {
    pub lang: Language,
    pub name: PersonName,
    pub position: PlainText,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub sort_order: i32,
    pub socials: Vec<NewTeamSocial>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateTeamMember {
    pub name: PersonName,
    pub position: PlainText,
    pub bio: Option<String>,
    /// New photo path; `None` keeps the stored one.
    pub photo: Option<String>,
    pub sort_order: i32,
    /// Replacement socials; `None` keeps the stored ones.
    pub socials: Option<Vec<NewTeamSocial>>,
}
