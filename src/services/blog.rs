//! Services for blog posts.

use crate::domain::blog::Blog;
use crate::domain::types::{BlogId, Language};
use crate::forms::blog::BlogPayload;
use crate::repository::{BlogReader, BlogWriter};
use crate::services::{
    ServiceError, ServiceResult, content_query, persist_with_uploads, store_images,
};
use crate::uploads::UploadStorage;

/// Lists posts of `lang`, newest first. Returns the unpaginated total too.
pub fn list_blogs<R>(
    repo: &R,
    lang: Language,
    page: Option<usize>,
    per_page: usize,
) -> ServiceResult<(usize, Vec<Blog>)>
where
    R: BlogReader + ?Sized,
{
    let query = content_query(lang, page, per_page)?;
    Ok(repo.list_blogs(query)?)
}

pub fn get_blog<R>(repo: &R, id: i32) -> ServiceResult<Blog>
where
    R: BlogReader + ?Sized,
{
    repo.get_blog_by_id(BlogId::new(id)?)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_blog<R>(repo: &R, storage: &UploadStorage, payload: BlogPayload) -> ServiceResult<Blog>
where
    R: BlogWriter + ?Sized,
{
    let stored = store_images(storage, payload.image, payload.additional_images)?;
    let paths = stored.all();
    let new_blog = payload.fields.into_new(stored.image, stored.gallery);

    persist_with_uploads(storage, &paths, || repo.create_blog(&new_blog))
}

/// Replaces the text of a post. A sent cover image or gallery replaces the
/// stored one and the replaced files are deleted.
pub fn update_blog<R>(
    repo: &R,
    storage: &UploadStorage,
    id: i32,
    payload: BlogPayload,
) -> ServiceResult<Blog>
where
    R: BlogReader + BlogWriter + ?Sized,
{
    let id = BlogId::new(id)?;
    let existing = repo.get_blog_by_id(id)?.ok_or(ServiceError::NotFound)?;

    let stored = store_images(storage, payload.image, payload.additional_images)?;
    let paths = stored.all();
    let gallery = (!stored.gallery.is_empty()).then_some(stored.gallery);
    let updates = payload.fields.into_update(stored.image, gallery);

    let blog = persist_with_uploads(storage, &paths, || repo.update_blog(id, &updates))?;

    if updates.image.is_some() {
        if let Some(old) = &existing.image {
            storage.remove(old);
        }
    }
    if updates.additional_images.is_some() {
        storage.remove_all(&existing.additional_images);
    }

    Ok(blog)
}

/// Deletes the post and every upload it references.
pub fn delete_blog<R>(repo: &R, storage: &UploadStorage, id: i32) -> ServiceResult<()>
where
    R: BlogReader + BlogWriter + ?Sized,
{
    let id = BlogId::new(id)?;
    let existing = repo.get_blog_by_id(id)?.ok_or(ServiceError::NotFound)?;

    repo.delete_blog(id)?;
    storage.remove_all(&existing.upload_paths());

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::types::{RichText, Title};
    use crate::forms::blog::BlogFields;
    use crate::repository::ContentListQuery;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::test_support::{exists, existing_upload, png};

    fn blog(image: Option<String>, additional_images: Vec<String>) -> Blog {
        let now = Utc::now().naive_utc();
        Blog {
            id: BlogId::new(5).unwrap(),
            lang: Language::En,
            title: "Launch".into(),
            excerpt: None,
            content: "<p>Body</p>".into(),
            author: None,
            image,
            additional_images,
            created_at: now,
            updated_at: now,
        }
    }

    fn payload(image: bool, gallery: usize) -> BlogPayload {
        BlogPayload {
            fields: BlogFields {
                lang: Language::En,
                title: Title::new("Launch").unwrap(),
                content: RichText::new("<p>Body</p>").unwrap(),
                excerpt: None,
                author: None,
            },
            image: image.then(png),
            additional_images: (0..gallery).map(|_| png()).collect(),
        }
    }

    #[test]
    fn list_paginates_only_with_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_blogs()
            .with(eq(ContentListQuery::new(Language::En).paginate(2, 10)))
            .returning(|_| Ok((11, vec![])));
        repo.expect_list_blogs()
            .with(eq(ContentListQuery::new(Language::Ar)))
            .returning(|_| Ok((0, vec![])));

        let (total, _) = list_blogs(&repo, Language::En, Some(2), 10).unwrap();
        assert_eq!(total, 11);
        list_blogs(&repo, Language::Ar, None, 10).unwrap();
    }

    #[test]
    fn list_rejects_unaddressable_page() {
        let repo = MockRepository::new();

        let result = list_blogs(&repo, Language::En, Some(usize::MAX / 2), 10);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn create_stores_cover_and_gallery() {
        let dir = tempfile::tempdir().unwrap();
        let storage = UploadStorage::new(dir.path());

        let mut repo = MockRepository::new();
        repo.expect_create_blog()
            .withf(|new_blog| new_blog.image.is_some() && new_blog.additional_images.len() == 2)
            .returning(|new_blog| {
                Ok(blog(
                    new_blog.image.clone(),
                    new_blog.additional_images.clone(),
                ))
            });

        let created = create_blog(&repo, &storage, payload(true, 2)).unwrap();

        assert!(created.upload_paths().iter().all(|p| exists(&storage, p)));
        assert_eq!(storage.list().unwrap().len(), 3);
    }

    #[test]
    fn failed_create_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = UploadStorage::new(dir.path());

        let mut repo = MockRepository::new();
        repo.expect_create_blog()
            .returning(|_| Err(RepositoryError::DatabaseError("disk full".into())));

        assert!(create_blog(&repo, &storage, payload(true, 1)).is_err());
        assert!(storage.list().unwrap().is_empty());
    }

    #[test]
    fn update_replaces_gallery_and_deletes_old_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = UploadStorage::new(dir.path());
        let cover = existing_upload(&storage);
        let old_gallery = vec![existing_upload(&storage), existing_upload(&storage)];

        let mut repo = MockRepository::new();
        let current = blog(Some(cover.clone()), old_gallery.clone());
        repo.expect_get_blog_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        let kept_cover = cover.clone();
        repo.expect_update_blog()
            .withf(|_, updates| updates.image.is_none() && updates.additional_images.is_some())
            .returning(move |_, updates| {
                Ok(blog(
                    Some(kept_cover.clone()),
                    updates.additional_images.clone().unwrap_or_default(),
                ))
            });

        let updated = update_blog(&repo, &storage, 5, payload(false, 1)).unwrap();

        assert!(exists(&storage, &cover));
        assert!(old_gallery.iter().all(|p| !exists(&storage, p)));
        assert!(exists(&storage, &updated.additional_images[0]));
    }

    #[test]
    fn update_unknown_blog_stores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = UploadStorage::new(dir.path());

        let mut repo = MockRepository::new();
        repo.expect_get_blog_by_id().returning(|_| Ok(None));

        let result = update_blog(&repo, &storage, 9, payload(true, 0));

        assert!(matches!(result, Err(ServiceError::NotFound)));
        assert!(storage.list().unwrap().is_empty());
    }

    #[test]
    fn delete_removes_every_upload() {
        let dir = tempfile::tempdir().unwrap();
        let storage = UploadStorage::new(dir.path());
        let cover = existing_upload(&storage);
        let extra = existing_upload(&storage);

        let mut repo = MockRepository::new();
        let current = blog(Some(cover), vec![extra]);
        repo.expect_get_blog_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        repo.expect_delete_blog().times(1).returning(|_| Ok(()));

        delete_blog(&repo, &storage, 5).unwrap();

        assert!(storage.list().unwrap().is_empty());
    }

    #[test]
    fn non_positive_id_is_rejected() {
        let repo = MockRepository::new();
        assert!(matches!(get_blog(&repo, 0), Err(ServiceError::TypeConstraint(_))));
    }
}
