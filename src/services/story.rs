use crate::domain::story::{NewStory, Story, UpdateStory};
use crate::domain::types::StoryId;
use crate::forms::story::StoryForm;
use crate::repository::{StoryReader, StoryWriter};
use crate::services::ServiceResult;

pub fn list_stories<R>(repo: &R) -> ServiceResult<Vec<Story>>
where
    R: StoryReader + ?Sized,
{
    Ok(repo.list_stories()?)
}

pub fn create_story<R>(repo: &R, form: StoryForm) -> ServiceResult<Story>
where
    R: StoryWriter + ?Sized,
{
    let story = NewStory::try_from(form)?;
    Ok(repo.create_story(&story)?)
}

pub fn update_story<R>(repo: &R, id: i32, form: StoryForm) -> ServiceResult<Story>
where
    R: StoryWriter + ?Sized,
{
    let updates = UpdateStory::try_from(form)?;
    Ok(repo.update_story(StoryId::new(id)?, &updates)?)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::repository::mock::MockRepository;

    #[test]
    fn content_is_sanitized_before_storage() {
        let mut repo = MockRepository::new();
        repo.expect_create_story()
            .withf(|story| !story.content.as_str().contains("<script"))
            .returning(|story| {
                let now = Utc::now().naive_utc();
                Ok(Story {
                    id: StoryId::new(1).unwrap(),
                    title: story.title.to_string(),
                    content: story.content.to_string(),
                    created_at: now,
                    updated_at: now,
                })
            });

        let form = StoryForm {
            title: "Founded".into(),
            content: "<p>1998</p><script>x()</script>".into(),
        };
        let story = create_story(&repo, form).unwrap();
        assert_eq!(story.content, "<p>1998</p>");
    }
}
