//! Repository implementation for blog posts.

use diesel::prelude::*;

use crate::{
    domain::{
        blog::{Blog, NewBlog, UpdateBlog},
        types::BlogId,
    },
    models::{
        blog::{Blog as DbBlog, NewBlog as DbNewBlog, UpdateBlog as DbUpdateBlog},
        encode_paths,
    },
    repository::{
        BlogReader, BlogWriter, ContentListQuery, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl BlogReader for DieselRepository {
    fn list_blogs(&self, query: ContentListQuery) -> RepositoryResult<(usize, Vec<Blog>)> {
        use crate::schema::blogs;

        let mut conn = self.conn()?;
        let lang = query.lang.as_str();

        let total = blogs::table
            .filter(blogs::lang.eq(lang))
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = blogs::table
            .filter(blogs::lang.eq(lang))
            .order((blogs::created_at.desc(), blogs::id.desc()))
            .select(DbBlog::as_select())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(pagination) = &query.pagination {
            let (offset, limit) = pagination.bounds().ok_or_else(|| {
                RepositoryError::ValidationError(format!("page {} is out of range", pagination.page))
            })?;
            items = items.offset(offset).limit(limit);
        }

        let blogs = items
            .load::<DbBlog>(&mut conn)?
            .into_iter()
            .map(Blog::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, blogs))
    }

    fn get_blog_by_id(&self, id: BlogId) -> RepositoryResult<Option<Blog>> {
        use crate::schema::blogs;

        let mut conn = self.conn()?;
        let blog = blogs::table
            .find(id.get())
            .select(DbBlog::as_select())
            .first::<DbBlog>(&mut conn)
            .optional()?;

        Ok(blog.map(Blog::try_from).transpose()?)
    }
}

impl BlogWriter for DieselRepository {
    fn create_blog(&self, blog: &NewBlog) -> RepositoryResult<Blog> {
        use crate::schema::blogs;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(blogs::table)
            .values(&DbNewBlog::from(blog))
            .returning(DbBlog::as_returning())
            .get_result::<DbBlog>(&mut conn)?;

        Ok(Blog::try_from(created)?)
    }

    fn update_blog(&self, id: BlogId, updates: &UpdateBlog) -> RepositoryResult<Blog> {
        use crate::schema::blogs;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let target = blogs::table.find(id.get());

            let affected = diesel::update(target)
                .set(&DbUpdateBlog::from(updates))
                .execute(conn)?;
            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }

            if let Some(image) = &updates.image {
                diesel::update(target)
                    .set(blogs::image.eq(Some(image.as_str())))
                    .execute(conn)?;
            }
            if let Some(gallery) = &updates.additional_images {
                diesel::update(target)
                    .set(blogs::additional_images.eq(encode_paths(gallery)))
                    .execute(conn)?;
            }

            let updated = target
                .select(DbBlog::as_select())
                .first::<DbBlog>(conn)?;
            Ok(Blog::try_from(updated)?)
        })
    }

    fn delete_blog(&self, id: BlogId) -> RepositoryResult<()> {
        use crate::schema::blogs;

        let mut conn = self.conn()?;
        let affected = diesel::delete(blogs::table.find(id.get())).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
