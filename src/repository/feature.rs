use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::{
        feature::{FeatureItem, FeatureSection, NewFeatureItem, NewFeatureSection, UpdateFeatureSection},
        types::{FeatureItemId, FeatureSectionId, Language},
    },
    models::feature::{
        FeatureItem as DbFeatureItem, FeatureSection as DbFeatureSection,
        NewFeatureItem as DbNewFeatureItem, NewFeatureSection as DbNewFeatureSection,
        UpdateFeatureSection as DbUpdateFeatureSection,
    },
    repository::{
        DieselRepository, FeatureReader, FeatureWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Attaches ordered items to each of the given sections.
fn with_items(
    conn: &mut SqliteConnection,
    sections: Vec<DbFeatureSection>,
) -> RepositoryResult<Vec<FeatureSection>> {
    use crate::schema::features_items;

    let items = DbFeatureItem::belonging_to(&sections)
        .order((features_items::sort_order.asc(), features_items::id.asc()))
        .select(DbFeatureItem::as_select())
        .load::<DbFeatureItem>(conn)?;
    let grouped = items.grouped_by(&sections);

    let sections = sections
        .into_iter()
        .zip(grouped)
        .map(|(section, items)| section.into_domain(items))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(sections)
}

fn load_section(
    conn: &mut SqliteConnection,
    id: i32,
) -> RepositoryResult<Option<FeatureSection>> {
    use crate::schema::features_sections;

    let section = features_sections::table
        .find(id)
        .select(DbFeatureSection::as_select())
        .first::<DbFeatureSection>(conn)
        .optional()?;

    match section {
        Some(section) => Ok(with_items(conn, vec![section])?.pop()),
        None => Ok(None),
    }
}

impl FeatureReader for DieselRepository {
    fn list_feature_sections(&self, lang: Language) -> RepositoryResult<Vec<FeatureSection>> {
        use crate::schema::features_sections;

        let mut conn = self.conn()?;
        let sections = features_sections::table
            .filter(features_sections::lang.eq(lang.as_str()))
            .order((features_sections::sort_order.asc(), features_sections::id.asc()))
            .select(DbFeatureSection::as_select())
            .load::<DbFeatureSection>(&mut conn)?;

        with_items(&mut conn, sections)
    }

    fn get_feature_section_by_id(
        &self,
        id: FeatureSectionId,
    ) -> RepositoryResult<Option<FeatureSection>> {
        let mut conn = self.conn()?;
        load_section(&mut conn, id.get())
    }
}

impl FeatureWriter for DieselRepository {
    fn create_feature_section(
        &self,
        section: &NewFeatureSection,
    ) -> RepositoryResult<FeatureSection> {
        use crate::schema::{features_items, features_sections};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let section_id = diesel::insert_into(features_sections::table)
                .values(&DbNewFeatureSection::from(section))
                .returning(features_sections::id)
                .get_result::<i32>(conn)?;

            let items: Vec<DbNewFeatureItem> = section
                .items
                .iter()
                .map(|item| DbNewFeatureItem::for_section(section_id, item))
                .collect();
            if !items.is_empty() {
                diesel::insert_into(features_items::table)
                    .values(&items)
                    .execute(conn)?;
            }

            load_section(conn, section_id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn update_feature_section(
        &self,
        id: FeatureSectionId,
        updates: &UpdateFeatureSection,
    ) -> RepositoryResult<FeatureSection> {
        use crate::schema::features_sections;

        let mut conn = self.conn()?;

        let affected = diesel::update(features_sections::table.find(id.get()))
            .set(&DbUpdateFeatureSection::from(updates))
            .execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        load_section(&mut conn, id.get())?.ok_or(RepositoryError::NotFound)
    }

    fn add_feature_item(
        &self,
        section_id: FeatureSectionId,
        item: &NewFeatureItem,
    ) -> RepositoryResult<FeatureItem> {
        use crate::schema::{features_items, features_sections};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let exists = features_sections::table
                .find(section_id.get())
                .select(features_sections::id)
                .first::<i32>(conn)
                .optional()?;
            if exists.is_none() {
                return Err(RepositoryError::NotFound);
            }

            let created = diesel::insert_into(features_items::table)
                .values(&DbNewFeatureItem::for_section(section_id.get(), item))
                .returning(DbFeatureItem::as_returning())
                .get_result::<DbFeatureItem>(conn)?;

            Ok(FeatureItem::try_from(created)?)
        })
    }

    fn delete_feature_item(&self, id: FeatureItemId) -> RepositoryResult<()> {
        use crate::schema::features_items;

        let mut conn = self.conn()?;
        let affected = diesel::delete(features_items::table.find(id.get())).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
