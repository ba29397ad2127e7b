use crate::domain::contact::{Contact, NewContact};
use crate::forms::contact::ContactForm;
use crate::repository::{ContactReader, ContactWriter};
use crate::services::ServiceResult;

/// Lists contact form submissions, newest first.
pub fn list_contacts<R>(repo: &R) -> ServiceResult<Vec<Contact>>
where
    R: ContactReader + ?Sized,
{
    Ok(repo.list_contacts()?)
}

pub fn create_contact<R>(repo: &R, form: ContactForm) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    let new_contact = NewContact::try_from(form)?;
    let contact = repo.create_contact(&new_contact).map_err(|err| {
        log::error!("Failed to store contact submission: {err}");
        err
    })?;
    log::info!("Stored contact submission {}", contact.id);
    Ok(contact)
}
