use diesel::prelude::*;

use crate::{
    domain::{
        statistic::{NewStatistic, Statistic, UpdateStatistic},
        types::{Language, StatisticId},
    },
    models::statistic::{
        NewStatistic as DbNewStatistic, Statistic as DbStatistic,
        UpdateStatistic as DbUpdateStatistic,
    },
    repository::{
        DieselRepository, StatisticReader, StatisticWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl StatisticReader for DieselRepository {
    fn list_statistics(&self, lang: Language) -> RepositoryResult<Vec<Statistic>> {
        use crate::schema::statistics;

        let mut conn = self.conn()?;
        let items = statistics::table
            .filter(statistics::lang.eq(lang.as_str()))
            .order((statistics::sort_order.asc(), statistics::id.asc()))
            .select(DbStatistic::as_select())
            .load::<DbStatistic>(&mut conn)?
            .into_iter()
            .map(Statistic::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }
}

impl StatisticWriter for DieselRepository {
    fn create_statistic(&self, statistic: &NewStatistic) -> RepositoryResult<Statistic> {
        use crate::schema::statistics;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(statistics::table)
            .values(&DbNewStatistic::from(statistic))
            .returning(DbStatistic::as_returning())
            .get_result::<DbStatistic>(&mut conn)?;

        Ok(Statistic::try_from(created)?)
    }

    fn update_statistic(
        &self,
        id: StatisticId,
        updates: &UpdateStatistic,
    ) -> RepositoryResult<Statistic> {
        use crate::schema::statistics;

        let mut conn = self.conn()?;
        let updated = diesel::update(statistics::table.find(id.get()))
            .set(&DbUpdateStatistic::from(updates))
            .returning(DbStatistic::as_returning())
            .get_result::<DbStatistic>(&mut conn)?;

        Ok(Statistic::try_from(updated)?)
    }

    fn delete_statistic(&self, id: StatisticId) -> RepositoryResult<()> {
        use crate::schema::statistics;

        let mut conn = self.conn()?;
        let affected = diesel::delete(statistics::table.find(id.get())).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
