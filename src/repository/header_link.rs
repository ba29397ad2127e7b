use diesel::prelude::*;

use crate::{
    domain::{
        header_link::{HeaderLink, NewHeaderLink, UpdateHeaderLink},
        types::{HeaderLinkId, Language},
    },
    models::header_link::{
        HeaderLink as DbHeaderLink, NewHeaderLink as DbNewHeaderLink,
        UpdateHeaderLink as DbUpdateHeaderLink,
    },
    repository::{
        DieselRepository, HeaderLinkReader, HeaderLinkWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl HeaderLinkReader for DieselRepository {
    fn list_header_links(&self, lang: Language) -> RepositoryResult<Vec<HeaderLink>> {
        use crate::schema::header_links;

        let mut conn = self.conn()?;
        let links = header_links::table
            .filter(header_links::lang.eq(lang.as_str()))
            .order((header_links::sort_order.asc(), header_links::id.asc()))
            .select(DbHeaderLink::as_select())
            .load::<DbHeaderLink>(&mut conn)?
            .into_iter()
            .map(HeaderLink::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(links)
    }
}

impl HeaderLinkWriter for DieselRepository {
    fn create_header_link(&self, link: &NewHeaderLink) -> RepositoryResult<HeaderLink> {
        use crate::schema::header_links;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(header_links::table)
            .values(&DbNewHeaderLink::from(link))
            .returning(DbHeaderLink::as_returning())
            .get_result::<DbHeaderLink>(&mut conn)?;

        Ok(HeaderLink::try_from(created)?)
    }

    fn update_header_link(
        &self,
        id: HeaderLinkId,
        updates: &UpdateHeaderLink,
    ) -> RepositoryResult<HeaderLink> {
        use crate::schema::header_links;

        let mut conn = self.conn()?;
        let updated = diesel::update(header_links::table.find(id.get()))
            .set(&DbUpdateHeaderLink::from(updates))
            .returning(DbHeaderLink::as_returning())
            .get_result::<DbHeaderLink>(&mut conn)?;

        Ok(HeaderLink::try_from(updated)?)
    }

    fn delete_header_link(&self, id: HeaderLinkId) -> RepositoryResult<()> {
        use crate::schema::header_links;

        let mut conn = self.conn()?;
        let affected = diesel::delete(header_links::table.find(id.get())).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
