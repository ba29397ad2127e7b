use diesel::prelude::*;

use crate::{
    domain::contact::{Contact, NewContact},
    models::contact::{Contact as DbContact, NewContact as DbNewContact},
    repository::{ContactReader, ContactWriter, DieselRepository, errors::RepositoryResult},
};

impl ContactReader for DieselRepository {
    fn list_contacts(&self) -> RepositoryResult<Vec<Contact>> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let items = contacts::table
            .order((contacts::created_at.desc(), contacts::id.desc()))
            .select(DbContact::as_select())
            .load::<DbContact>(&mut conn)?
            .into_iter()
            .map(Contact::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }
}

impl ContactWriter for DieselRepository {
    fn create_contact(&self, contact: &NewContact) -> RepositoryResult<Contact> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(contacts::table)
            .values(&DbNewContact::from(contact))
            .returning(DbContact::as_returning())
            .get_result::<DbContact>(&mut conn)?;

        Ok(Contact::try_from(created)?)
    }
}
