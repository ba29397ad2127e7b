use diesel::prelude::*;

use crate::{
    domain::{
        story::{NewStory, Story, UpdateStory},
        types::StoryId,
    },
    models::story::{NewStory as DbNewStory, Story as DbStory, UpdateStory as DbUpdateStory},
    repository::{DieselRepository, StoryReader, StoryWriter, errors::RepositoryResult},
};

impl StoryReader for DieselRepository {
    fn list_stories(&self) -> RepositoryResult<Vec<Story>> {
        use crate::schema::story;

        let mut conn = self.conn()?;
        let items = story::table
            .order(story::id.asc())
            .select(DbStory::as_select())
            .load::<DbStory>(&mut conn)?
            .into_iter()
            .map(Story::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }
}

impl StoryWriter for DieselRepository {
    fn create_story(&self, new_story: &NewStory) -> RepositoryResult<Story> {
        use crate::schema::story;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(story::table)
            .values(&DbNewStory::from(new_story))
            .returning(DbStory::as_returning())
            .get_result::<DbStory>(&mut conn)?;

        Ok(Story::try_from(created)?)
    }

    fn update_story(&self, id: StoryId, updates: &UpdateStory) -> RepositoryResult<Story> {
        use crate::schema::story;

        let mut conn = self.conn()?;
        let updated = diesel::update(story::table.find(id.get()))
            .set(&DbUpdateStory::from(updates))
            .returning(DbStory::as_returning())
            .get_result::<DbStory>(&mut conn)?;

        Ok(Story::try_from(updated)?)
    }
}
