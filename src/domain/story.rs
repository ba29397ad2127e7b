use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{RichText, StoryId, Title};

/// Narrative block of the company story. Not localized.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewStory {
    pub title: Title,
    pub content: RichText,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateStory {
    pub title: Title,
    pub content: RichText,
}
