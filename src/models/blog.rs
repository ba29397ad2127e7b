use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::blog::{Blog as DomainBlog, NewBlog as DomainNewBlog, UpdateBlog as DomainUpdateBlog};
use crate::domain::types::{BlogId, Language, TypeConstraintError};
use crate::models::{decode_paths, encode_paths};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::blogs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::blog::Blog`].
pub struct Blog {
    pub id: i32,
    pub lang: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: Option<String>,
    pub image: Option<String>,
    pub additional_images: String, // JSON array of upload paths
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::blogs)]
pub struct NewBlog<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub excerpt: Option<&'a str>,
    pub content: &'a str,
    pub author: Option<&'a str>,
    pub image: Option<&'a str>,
    pub additional_images: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::blogs)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateBlog<'a> {
    pub title: &'a str,
    pub excerpt: Option<&'a str>,
    pub content: &'a str,
    pub author: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Blog> for DomainBlog {
    type Error = TypeConstraintError;

    fn try_from(blog: Blog) -> Result<Self, Self::Error> {
        Ok(Self {
            id: BlogId::new(blog.id)?,
            lang: Language::from_str(&blog.lang)?,
            title: blog.title,
            excerpt: blog.excerpt,
            content: blog.content,
            author: blog.author,
            image: blog.image,
            additional_images: decode_paths(&blog.additional_images),
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewBlog> for NewBlog<'a> {
    fn from(blog: &'a DomainNewBlog) -> Self {
        Self {
            lang: blog.lang.as_str(),
            title: blog.title.as_str(),
            excerpt: blog.excerpt.as_deref(),
            content: blog.content.as_str(),
            author: blog.author.as_deref(),
            image: blog.image.as_deref(),
            additional_images: encode_paths(&blog.additional_images),
        }
    }
}

impl<'a> From<&'a DomainUpdateBlog> for UpdateBlog<'a> {
    fn from(blog: &'a DomainUpdateBlog) -> Self {
        Self {
            title: blog.title.as_str(),
            excerpt: blog.excerpt.as_deref(),
            content: blog.content.as_str(),
            author: blog.author.as_deref(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{RichText, Title};

    #[test]
    fn from_domain_new_encodes_gallery() {
        let domain = DomainNewBlog {
            lang: Language::Ar,
            title: Title::new("افتتاح فرع جديد").unwrap(),
            excerpt: None,
            content: RichText::new("<p>نص</p>").unwrap(),
            author: Some("الإدارة".to_string()),
            image: Some("/uploads/cover.png".to_string()),
            additional_images: vec!["/uploads/1.png".to_string()],
        };
        let new: NewBlog = (&domain).into();
        assert_eq!(new.lang, "ar");
        assert_eq!(new.title, "افتتاح فرع جديد");
        assert_eq!(new.image, Some("/uploads/cover.png"));
        assert_eq!(new.additional_images, "[\"/uploads/1.png\"]");
    }

    #[test]
    fn blog_into_domain() {
        let now = chrono::Utc::now().naive_utc();
        let db = Blog {
            id: 3,
            lang: "en".to_string(),
            title: "t".to_string(),
            excerpt: Some("e".to_string()),
            content: "c".to_string(),
            author: None,
            image: None,
            additional_images: "[\"/uploads/x.webp\"]".to_string(),
            created_at: now,
            updated_at: now,
        };
        let domain = DomainBlog::try_from(db).unwrap();
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.lang, Language::En);
        assert_eq!(domain.additional_images, vec!["/uploads/x.webp"]);
        assert_eq!(domain.upload_paths(), vec!["/uploads/x.webp"]);
    }
}
