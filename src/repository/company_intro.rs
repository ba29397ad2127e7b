use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::{
        company_intro::{CompanyIntro, SaveCompanyIntro},
        types::{CompanyIntroId, Language},
    },
    models::{
        company_intro::{
            CompanyIntro as DbCompanyIntro, NewCompanyIntro as DbNewCompanyIntro,
            UpdateCompanyIntro as DbUpdateCompanyIntro,
        },
        encode_paths,
    },
    repository::{
        CompanyIntroReader, CompanyIntroWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn load_intro(conn: &mut SqliteConnection, lang: Language) -> RepositoryResult<Option<CompanyIntro>> {
    use crate::schema::company_intro;

    let intro = company_intro::table
        .filter(company_intro::lang.eq(lang.as_str()))
        .select(DbCompanyIntro::as_select())
        .first::<DbCompanyIntro>(conn)
        .optional()?;

    Ok(intro.map(CompanyIntro::try_from).transpose()?)
}

fn store_images(
    conn: &mut SqliteConnection,
    id: CompanyIntroId,
    images: &[String],
) -> RepositoryResult<CompanyIntro> {
    use crate::schema::company_intro;

    let updated = diesel::update(company_intro::table.find(id.get()))
        .set((
            company_intro::images.eq(encode_paths(images)),
            company_intro::updated_at.eq(chrono::Utc::now().naive_utc()),
        ))
        .returning(DbCompanyIntro::as_returning())
        .get_result::<DbCompanyIntro>(conn)?;

    Ok(CompanyIntro::try_from(updated)?)
}

impl CompanyIntroReader for DieselRepository {
    fn get_company_intro(&self, lang: Language) -> RepositoryResult<Option<CompanyIntro>> {
        let mut conn = self.conn()?;
        load_intro(&mut conn, lang)
    }
}

impl CompanyIntroWriter for DieselRepository {
    fn save_company_intro(&self, intro: &SaveCompanyIntro) -> RepositoryResult<CompanyIntro> {
        use crate::schema::company_intro;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let existing = company_intro::table
                .filter(company_intro::lang.eq(intro.lang.as_str()))
                .select(company_intro::id)
                .first::<i32>(conn)
                .optional()?;

            let saved = match existing {
                Some(id) => diesel::update(company_intro::table.find(id))
                    .set(&DbUpdateCompanyIntro::from(intro))
                    .returning(DbCompanyIntro::as_returning())
                    .get_result::<DbCompanyIntro>(conn)?,
                None => diesel::insert_into(company_intro::table)
                    .values(&DbNewCompanyIntro::from(intro))
                    .returning(DbCompanyIntro::as_returning())
                    .get_result::<DbCompanyIntro>(conn)?,
            };

            Ok(CompanyIntro::try_from(saved)?)
        })
    }

    fn append_company_intro_image(
        &self,
        lang: Language,
        path: &str,
    ) -> RepositoryResult<CompanyIntro> {
        let mut conn = self.conn()?;
        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let intro = load_intro(conn, lang)?.ok_or(RepositoryError::NotFound)?;
            let images = intro.images_with(path.to_string());
            store_images(conn, intro.id, &images)
        })
    }

    fn remove_company_intro_image(
        &self,
        lang: Language,
        index: usize,
    ) -> RepositoryResult<(CompanyIntro, String)> {
        let mut conn = self.conn()?;
        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let intro = load_intro(conn, lang)?.ok_or(RepositoryError::NotFound)?;
            let (images, removed) = intro
                .images_without(index)
                .ok_or(RepositoryError::NotFound)?;
            let updated = store_images(conn, intro.id, &images)?;
            Ok((updated, removed))
        })
    }
}
