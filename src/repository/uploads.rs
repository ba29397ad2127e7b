//! Collects every upload path that stored content still points at.

use diesel::prelude::*;

use crate::{
    models::decode_paths,
    repository::{DieselRepository, UploadReferenceReader, errors::RepositoryResult},
};

impl UploadReferenceReader for DieselRepository {
    fn list_upload_references(&self) -> RepositoryResult<Vec<String>> {
        use crate::schema::{
            about_us, blogs, certificates, company_intro, projects, projects_background, team,
        };

        let mut conn = self.conn()?;
        let mut paths = Vec::new();

        let singles = [
            about_us::table
                .select(about_us::image)
                .load::<Option<String>>(&mut conn)?,
            blogs::table
                .select(blogs::image)
                .load::<Option<String>>(&mut conn)?,
            projects::table
                .select(projects::image)
                .load::<Option<String>>(&mut conn)?,
            projects_background::table
                .select(projects_background::image)
                .load::<Option<String>>(&mut conn)?,
            team::table
                .select(team::photo)
                .load::<Option<String>>(&mut conn)?,
        ];
        paths.extend(singles.into_iter().flatten().flatten());

        paths.extend(
            certificates::table
                .select(certificates::image)
                .load::<String>(&mut conn)?,
        );

        let galleries = [
            blogs::table
                .select(blogs::additional_images)
                .load::<String>(&mut conn)?,
            projects::table
                .select(projects::additional_images)
                .load::<String>(&mut conn)?,
            company_intro::table
                .select(company_intro::images)
                .load::<String>(&mut conn)?,
        ];
        for raw in galleries.iter().flatten() {
            paths.extend(decode_paths(raw));
        }

        paths.sort();
        paths.dedup();
        Ok(paths)
    }
}
