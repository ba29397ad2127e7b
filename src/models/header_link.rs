use std::str::FromStr;

use diesel::prelude::*;

use crate::domain::header_link::{
    HeaderLink as DomainHeaderLink, NewHeaderLink as DomainNewHeaderLink,
    UpdateHeaderLink as DomainUpdateHeaderLink,
};
use crate::domain::types::{HeaderLinkId, Language, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::header_links)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HeaderLink {
    pub id: i32,
    pub lang: String,
    pub label: String,
    pub url: String,
    pub sort_order: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::header_links)]
pub struct NewHeaderLink<'a> {
    pub lang: &'a str,
    pub label: &'a str,
    pub url: &'a str,
    pub sort_order: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::header_links)]
pub struct UpdateHeaderLink<'a> {
    pub label: &'a str,
    pub url: &'a str,
    pub sort_order: i32,
}

impl TryFrom<HeaderLink> for DomainHeaderLink {
    type Error = TypeConstraintError;

    fn try_from(value: HeaderLink) -> Result<Self, Self::Error> {
        Ok(Self {
            id: HeaderLinkId::new(value.id)?,
            lang: Language::from_str(&value.lang)?,
            label: value.label,
            url: value.url,
            sort_order: value.sort_order,
        })
    }
}

impl<'a> From<&'a DomainNewHeaderLink> for NewHeaderLink<'a> {
    fn from(value: &'a DomainNewHeaderLink) -> Self {
        Self {
            lang: value.lang.as_str(),
            label: value.label.as_str(),
            url: value.url.as_str(),
            sort_order: value.sort_order,
        }
    }
}

impl<'a> From<&'a DomainUpdateHeaderLink> for UpdateHeaderLink<'a> {
    fn from(value: &'a DomainUpdateHeaderLink) -> Self {
        Self {
            label: value.label.as_str(),
            url: value.url.as_str(),
            sort_order: value.sort_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{LinkTarget, PlainText};

    #[test]
    fn converts_from_db_to_domain() {
        let db = HeaderLink {
            id: 5,
            lang: "ar".to_string(),
            label: "من نحن".to_string(),
            url: "#about".to_string(),
            sort_order: 1,
        };

        let domain = DomainHeaderLink::try_from(db).unwrap();

        assert_eq!(domain.id.get(), 5);
        assert_eq!(domain.lang, Language::Ar);
        assert_eq!(domain.url, "#about");
    }

    #[test]
    fn converts_from_domain_to_insertable() {
        let domain = DomainNewHeaderLink {
            lang: Language::En,
            label: PlainText::new("Projects").unwrap(),
            url: LinkTarget::new("/projects").unwrap(),
            sort_order: 2,
        };

        let insertable: NewHeaderLink = (&domain).into();

        assert_eq!(insertable.lang, "en");
        assert_eq!(insertable.label, "Projects");
        assert_eq!(insertable.url, "/projects");
        assert_eq!(insertable.sort_order, 2);
    }
}
