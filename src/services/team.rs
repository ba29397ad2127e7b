//! Services for team members and their social links.

use crate::domain::team::TeamMember;
use crate::domain::types::{Language, TeamMemberId};
use crate::forms::team::TeamMemberPayload;
use crate::repository::{TeamReader, TeamWriter};
use crate::services::{ServiceError, ServiceResult, persist_with_uploads};
use crate::uploads::UploadStorage;

pub fn list_team_members<R>(repo: &R, lang: Language) -> ServiceResult<Vec<TeamMember>>
where
    R: TeamReader + ?Sized,
{
    Ok(repo.list_team_members(lang)?)
}

pub fn create_team_member<R>(
    repo: &R,
    storage: &UploadStorage,
    payload: TeamMemberPayload,
) -> ServiceResult<TeamMember>
where
    R: TeamWriter + ?Sized,
{
    let photo = payload.photo.map(|photo| storage.store(photo)).transpose()?;
    let stored: Vec<String> = photo.iter().cloned().collect();
    let member = payload.fields.into_new(photo);

    persist_with_uploads(storage, &stored, || repo.create_team_member(&member))
}

/// Updates a member. Socials are replaced only when sent; a new photo
/// deletes the previous file.
pub fn update_team_member<R>(
    repo: &R,
    storage: &UploadStorage,
    id: i32,
    payload: TeamMemberPayload,
) -> ServiceResult<TeamMember>
where
    R: TeamReader + TeamWriter + ?Sized,
{
    let id = TeamMemberId::new(id)?;
    let existing = repo
        .get_team_member_by_id(id)?
        .ok_or(ServiceError::NotFound)?;

    let photo = payload.photo.map(|photo| storage.store(photo)).transpose()?;
    let stored: Vec<String> = photo.iter().cloned().collect();
    let updates = payload.fields.into_update(photo);

    let member = persist_with_uploads(storage, &stored, || {
        repo.update_team_member(id, &updates)
    })?;

    if updates.photo.is_some() {
        if let Some(old) = &existing.photo {
            storage.remove(old);
        }
    }

    Ok(member)
}

pub fn delete_team_member<R>(repo: &R, storage: &UploadStorage, id: i32) -> ServiceResult<()>
where
    R: TeamReader + TeamWriter + ?Sized,
{
    let id = TeamMemberId::new(id)?;
    let existing = repo
        .get_team_member_by_id(id)?
        .ok_or(ServiceError::NotFound)?;

    repo.delete_team_member(id)?;
    if let Some(photo) = &existing.photo {
        storage.remove(photo);
    }

    Ok(())
}
