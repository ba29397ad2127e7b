//! Repository implementation for the about-us section.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::{
        about::{About, SaveAbout},
        types::Language,
    },
    models::about::{
        About as DbAbout, AboutBlock as DbAboutBlock, NewAbout as DbNewAbout,
        NewAboutBlock as DbNewAboutBlock, UpdateAbout as DbUpdateAbout,
    },
    repository::{
        AboutReader, AboutWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn load_about(conn: &mut SqliteConnection, lang: Language) -> RepositoryResult<Option<About>> {
    use crate::schema::{about_blocks, about_us};

    let Some(about) = about_us::table
        .filter(about_us::lang.eq(lang.as_str()))
        .select(DbAbout::as_select())
        .first::<DbAbout>(conn)
        .optional()?
    else {
        return Ok(None);
    };

    let blocks = DbAboutBlock::belonging_to(&about)
        .order((about_blocks::sort_order.asc(), about_blocks::id.asc()))
        .select(DbAboutBlock::as_select())
        .load::<DbAboutBlock>(conn)?;

    Ok(Some(about.into_domain(blocks)?))
}

impl AboutReader for DieselRepository {
    fn get_about(&self, lang: Language) -> RepositoryResult<Option<About>> {
        let mut conn = self.conn()?;
        load_about(&mut conn, lang)
    }
}

impl AboutWriter for DieselRepository {
    fn save_about(&self, about: &SaveAbout) -> RepositoryResult<About> {
        use crate::schema::{about_blocks, about_us};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let existing = about_us::table
                .filter(about_us::lang.eq(about.lang.as_str()))
                .select(about_us::id)
                .first::<i32>(conn)
                .optional()?;

            let about_id = match existing {
                Some(id) => {
                    diesel::update(about_us::table.find(id))
                        .set(&DbUpdateAbout::from(about))
                        .execute(conn)?;
                    if let Some(image) = &about.image {
                        diesel::update(about_us::table.find(id))
                            .set(about_us::image.eq(Some(image.as_str())))
                            .execute(conn)?;
                    }
                    id
                }
                None => diesel::insert_into(about_us::table)
                    .values(&DbNewAbout::from(about))
                    .returning(about_us::id)
                    .get_result::<i32>(conn)?,
            };

            if let Some(blocks) = &about.blocks {
                diesel::delete(about_blocks::table.filter(about_blocks::about_id.eq(about_id)))
                    .execute(conn)?;
                let rows: Vec<DbNewAboutBlock> = blocks
                    .iter()
                    .map(|block| DbNewAboutBlock::for_about(about_id, block))
                    .collect();
                if !rows.is_empty() {
                    diesel::insert_into(about_blocks::table)
                        .values(&rows)
                        .execute(conn)?;
                }
            }

            load_about(conn, about.lang)?.ok_or(RepositoryError::NotFound)
        })
    }
}
