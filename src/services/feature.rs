use crate::domain::feature::{FeatureItem, FeatureSection, NewFeatureSection, UpdateFeatureSection};
use crate::domain::types::{FeatureItemId, FeatureSectionId, Language};
use crate::forms::feature::{AddFeatureItemForm, CreateFeatureSectionForm, UpdateFeatureSectionForm};
use crate::repository::{FeatureReader, FeatureWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_feature_sections<R>(repo: &R, lang: Language) -> ServiceResult<Vec<FeatureSection>>
where
    R: FeatureReader + ?Sized,
{
    Ok(repo.list_feature_sections(lang)?)
}

/// Creates a section together with its initial items.
pub fn create_feature_section<R>(
    repo: &R,
    form: CreateFeatureSectionForm,
) -> ServiceResult<FeatureSection>
where
    R: FeatureWriter + ?Sized,
{
    let section = NewFeatureSection::try_from(form)?;
    Ok(repo.create_feature_section(&section)?)
}

pub fn update_feature_section<R>(
    repo: &R,
    id: i32,
    form: UpdateFeatureSectionForm,
) -> ServiceResult<FeatureSection>
where
    R: FeatureWriter + ?Sized,
{
    let updates = UpdateFeatureSection::try_from(form)?;
    Ok(repo.update_feature_section(FeatureSectionId::new(id)?, &updates)?)
}

/// Adds an item to a section, after the existing ones unless a position is given.
pub fn add_feature_item<R>(
    repo: &R,
    section_id: i32,
    form: AddFeatureItemForm,
) -> ServiceResult<FeatureItem>
where
    R: FeatureReader + FeatureWriter + ?Sized,
{
    let section_id = FeatureSectionId::new(section_id)?;
    let section = repo
        .get_feature_section_by_id(section_id)?
        .ok_or(ServiceError::NotFound)?;

    let next_position = section
        .items
        .iter()
        .map(|item| item.sort_order + 1)
        .max()
        .unwrap_or(0);
    let item = form.into_domain(next_position)?;

    Ok(repo.add_feature_item(section.id, &item)?)
}

pub fn delete_feature_item<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: FeatureWriter + ?Sized,
{
    Ok(repo.delete_feature_item(FeatureItemId::new(id)?)?)
}
