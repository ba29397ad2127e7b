use crate::domain::statistic::{NewStatistic, Statistic, UpdateStatistic};
use crate::domain::types::{Language, StatisticId};
use crate::forms::statistic::StatisticForm;
use crate::repository::{StatisticReader, StatisticWriter};
use crate::services::ServiceResult;

pub fn list_statistics<R>(repo: &R, lang: Language) -> ServiceResult<Vec<Statistic>>
where
    R: StatisticReader + ?Sized,
{
    Ok(repo.list_statistics(lang)?)
}

pub fn create_statistic<R>(repo: &R, form: StatisticForm) -> ServiceResult<Statistic>
where
    R: StatisticWriter + ?Sized,
{
    let statistic = NewStatistic::try_from(form)?;
    Ok(repo.create_statistic(&statistic)?)
}

pub fn update_statistic<R>(repo: &R, id: i32, form: StatisticForm) -> ServiceResult<Statistic>
where
    R: StatisticWriter + ?Sized,
{
    let updates = UpdateStatistic::try_from(form)?;
    Ok(repo.update_statistic(StatisticId::new(id)?, &updates)?)
}

pub fn delete_statistic<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: StatisticWriter + ?Sized,
{
    Ok(repo.delete_statistic(StatisticId::new(id)?)?)
}
