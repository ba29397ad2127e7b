use diesel::prelude::*;

use crate::{
    domain::{
        service::{NewService, Service, UpdateService},
        types::{Language, ServiceId},
    },
    models::service::{
        NewService as DbNewService, Service as DbService, UpdateService as DbUpdateService,
    },
    repository::{
        DieselRepository, ServiceReader, ServiceWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ServiceReader for DieselRepository {
    fn list_services(&self, lang: Language) -> RepositoryResult<Vec<Service>> {
        use crate::schema::services;

        let mut conn = self.conn()?;
        let items = services::table
            .filter(services::lang.eq(lang.as_str()))
            .order((services::sort_order.asc(), services::id.asc()))
            .select(DbService::as_select())
            .load::<DbService>(&mut conn)?
            .into_iter()
            .map(Service::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }
}

impl ServiceWriter for DieselRepository {
    fn create_service(&self, service: &NewService) -> RepositoryResult<Service> {
        use crate::schema::services;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(services::table)
            .values(&DbNewService::from(service))
            .returning(DbService::as_returning())
            .get_result::<DbService>(&mut conn)?;

        Ok(Service::try_from(created)?)
    }

    fn update_service(&self, id: ServiceId, updates: &UpdateService) -> RepositoryResult<Service> {
        use crate::schema::services;

        let mut conn = self.conn()?;
        let updated = diesel::update(services::table.find(id.get()))
            .set(&DbUpdateService::from(updates))
            .returning(DbService::as_returning())
            .get_result::<DbService>(&mut conn)?;

        Ok(Service::try_from(updated)?)
    }

    fn delete_service(&self, id: ServiceId) -> RepositoryResult<()> {
        use crate::schema::services;

        let mut conn = self.conn()?;
        let affected = diesel::delete(services::table.find(id.get())).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
