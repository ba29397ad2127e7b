//! Repository implementation for portfolio projects and the shared
//! projects page background.

use diesel::prelude::*;

use crate::{
    domain::{
        project::{NewProject, Project, ProjectsBackground, UpdateProject},
        types::ProjectId,
    },
    models::{
        encode_paths,
        project::{
            NewProject as DbNewProject, PROJECTS_BACKGROUND_ID, Project as DbProject,
            ProjectsBackground as DbProjectsBackground, UpdateProject as DbUpdateProject,
        },
    },
    repository::{
        ContentListQuery, DieselRepository, ProjectReader, ProjectWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ProjectReader for DieselRepository {
    fn list_projects(&self, query: ContentListQuery) -> RepositoryResult<(usize, Vec<Project>)> {
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let lang = query.lang.as_str();

        let total = projects::table
            .filter(projects::lang.eq(lang))
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = projects::table
            .filter(projects::lang.eq(lang))
            .order((projects::created_at.desc(), projects::id.desc()))
            .select(DbProject::as_select())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(pagination) = &query.pagination {
            let (offset, limit) = pagination.bounds().ok_or_else(|| {
                RepositoryError::ValidationError(format!("page {} is out of range", pagination.page))
            })?;
            items = items.offset(offset).limit(limit);
        }

        let projects = items
            .load::<DbProject>(&mut conn)?
            .into_iter()
            .map(Project::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, projects))
    }

    fn get_project_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let project = projects::table
            .find(id.get())
            .select(DbProject::as_select())
            .first::<DbProject>(&mut conn)
            .optional()?;

        Ok(project.map(Project::try_from).transpose()?)
    }

    fn get_projects_background(&self) -> RepositoryResult<ProjectsBackground> {
        use crate::schema::projects_background;

        let mut conn = self.conn()?;
        let background = projects_background::table
            .find(PROJECTS_BACKGROUND_ID)
            .select(DbProjectsBackground::as_select())
            .first::<DbProjectsBackground>(&mut conn)
            .optional()?;

        Ok(background.map(ProjectsBackground::from).unwrap_or_default())
    }
}

impl ProjectWriter for DieselRepository {
    fn create_project(&self, project: &NewProject) -> RepositoryResult<Project> {
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(projects::table)
            .values(&DbNewProject::from(project))
            .returning(DbProject::as_returning())
            .get_result::<DbProject>(&mut conn)?;

        Ok(Project::try_from(created)?)
    }

    fn update_project(&self, id: ProjectId, updates: &UpdateProject) -> RepositoryResult<Project> {
        use crate::schema::projects;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let target = projects::table.find(id.get());

            let affected = diesel::update(target)
                .set(&DbUpdateProject::from(updates))
                .execute(conn)?;
            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }

            if let Some(image) = &updates.image {
                diesel::update(target)
                    .set(projects::image.eq(Some(image.as_str())))
                    .execute(conn)?;
            }
            if let Some(gallery) = &updates.additional_images {
                diesel::update(target)
                    .set(projects::additional_images.eq(encode_paths(gallery)))
                    .execute(conn)?;
            }

            let updated = target
                .select(DbProject::as_select())
                .first::<DbProject>(conn)?;
            Ok(Project::try_from(updated)?)
        })
    }

    fn delete_project(&self, id: ProjectId) -> RepositoryResult<()> {
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let affected = diesel::delete(projects::table.find(id.get())).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn set_projects_background(&self, image: &str) -> RepositoryResult<ProjectsBackground> {
        use crate::schema::projects_background;

        let mut conn = self.conn()?;
        let row = DbProjectsBackground {
            id: PROJECTS_BACKGROUND_ID,
            image: Some(image.to_string()),
            updated_at: chrono::Utc::now().naive_utc(),
        };

        let saved = diesel::insert_into(projects_background::table)
            .values(&row)
            .on_conflict(projects_background::id)
            .do_update()
            .set(&row)
            .returning(DbProjectsBackground::as_returning())
            .get_result::<DbProjectsBackground>(&mut conn)?;

        Ok(saved.into())
    }
}
