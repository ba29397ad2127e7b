use crate::domain::header_link::{HeaderLink, NewHeaderLink, UpdateHeaderLink};
use crate::domain::types::{HeaderLinkId, Language};
use crate::forms::header_link::HeaderLinkForm;
use crate::repository::{HeaderLinkReader, HeaderLinkWriter};
use crate::services::ServiceResult;

pub fn list_header_links<R>(repo: &R, lang: Language) -> ServiceResult<Vec<HeaderLink>>
where
    R: HeaderLinkReader + ?Sized,
{
    Ok(repo.list_header_links(lang)?)
}

pub fn create_header_link<R>(repo: &R, form: HeaderLinkForm) -> ServiceResult<HeaderLink>
where
    R: HeaderLinkWriter + ?Sized,
{
    let link = NewHeaderLink::try_from(form)?;
    Ok(repo.create_header_link(&link)?)
}

pub fn update_header_link<R>(repo: &R, id: i32, form: HeaderLinkForm) -> ServiceResult<HeaderLink>
where
    R: HeaderLinkWriter + ?Sized,
{
    let updates = UpdateHeaderLink::try_from(form)?;
    Ok(repo.update_header_link(HeaderLinkId::new(id)?, &updates)?)
}

pub fn delete_header_link<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: HeaderLinkWriter + ?Sized,
{
    Ok(repo.delete_header_link(HeaderLinkId::new(id)?)?)
}
