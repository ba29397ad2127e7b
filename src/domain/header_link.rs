use serde::{Deserialize, Serialize};

use crate::domain::types::{HeaderLinkId, Language, LinkTarget, PlainText};

/// Navigation entry of the site header.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HeaderLink {
    pub id: HeaderLinkId,
    pub lang: Language,
    pub label: String,
    pub url: String,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewHeaderLink {
    pub lang: Language,
    pub label: PlainText,
    pub url: LinkTarget,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateHeaderLink {
    pub label: PlainText,
    pub url: LinkTarget,
    pub sort_order: i32,
}
