use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use serde::Deserialize;

use crate::domain::team::{NewTeamMember, NewTeamSocial, UpdateTeamMember};
use crate::domain::types::{Language, PersonName, PlainText, SocialUrl};
use crate::forms::{FormError, image, json_field, language, required, text};
use crate::uploads::UploadedImage;

/// One entry of the `socials` JSON array.
#[derive(Debug, Deserialize)]
pub struct SocialForm {
    pub platform: String,
    pub url: String,
}

/// Multipart body of `POST /api/team` and `PUT /api/team/{id}`.
#[derive(MultipartForm)]
pub struct TeamMemberForm {
    pub lang: Option<Text<String>>,
    pub name: Text<String>,
    pub position: Text<String>,
    pub bio: Option<Text<String>>,
    pub sort_order: Option<Text<i32>>,
    pub socials: Option<Text<String>>,
    pub photo: Option<TempFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMemberFields {
    pub lang: Language,
    pub name: PersonName,
    pub position: PlainText,
    pub bio: Option<String>,
    pub sort_order: i32,
    /// `None` when the request did not carry a `socials` field.
    pub socials: Option<Vec<NewTeamSocial>>,
}

pub struct TeamMemberPayload {
    pub fields: TeamMemberFields,
    pub photo: Option<UploadedImage>,
}

impl TryFrom<SocialForm> for NewTeamSocial {
    type Error = FormError;

    fn try_from(form: SocialForm) -> Result<Self, Self::Error> {
        let url = SocialUrl::new(form.url.as_str()).map_err(|_| FormError::InvalidUrl(form.url))?;
        Ok(Self {
            platform: required("socials.platform", form.platform, PlainText::new)?,
            url,
        })
    }
}

impl TryFrom<TeamMemberForm> for TeamMemberPayload {
    type Error = FormError;

    fn try_from(form: TeamMemberForm) -> Result<Self, Self::Error> {
        let socials = json_field::<Vec<SocialForm>>("socials", form.socials)?
            .map(|socials| {
                socials
                    .into_iter()
                    .map(NewTeamSocial::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Self {
            fields: TeamMemberFields {
                lang: language(form.lang)?,
                name: required("name", form.name.into_inner(), PersonName::new)?,
                position: required("position", form.position.into_inner(), PlainText::new)?,
                bio: text(form.bio),
                sort_order: form.sort_order.map(Text::into_inner).unwrap_or_default(),
                socials,
            },
            photo: image(form.photo),
        })
    }
}

impl TeamMemberFields {
    pub fn into_new(self, photo: Option<String>) -> NewTeamMember {
        NewTeamMember {
            lang: self.lang,
            name: self.name,
            position: self.position,
            bio: self.bio,
            photo,
            sort_order: self.sort_order,
            socials: self.socials.unwrap_or_default(),
        }
    }

    pub fn into_update(self, photo: Option<String>) -> UpdateTeamMember {
        UpdateTeamMember {
            name: self.name,
            position: self.position,
            bio: self.bio,
            photo,
            sort_order: self.sort_order,
            socials: self.socials,
        }
    }
}
