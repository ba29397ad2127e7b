use serde::Deserialize;
use validator::Validate;

use crate::domain::story::{NewStory, UpdateStory};
use crate::domain::types::{RichText, Title};
use crate::forms::{FormError, required};

#[derive(Debug, Deserialize, Validate)]
pub struct StoryForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
}

impl TryFrom<StoryForm> for NewStory {
    type Error = FormError;

    fn try_from(form: StoryForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            title: required("title", form.title, Title::new)?,
            content: required("content", form.content, RichText::new)?,
        })
    }
}

impl TryFrom<StoryForm> for UpdateStory {
    type Error = FormError;

    fn try_from(form: StoryForm) -> Result<Self, Self::Error> {
        let story = NewStory::try_from(form)?;
        Ok(Self {
            title: story.title,
            content: story.content,
        })
    }
}
