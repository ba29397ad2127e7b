use serde::Deserialize;
use validator::Validate;

use crate::domain::statistic::{NewStatistic, UpdateStatistic};
use crate::domain::types::{Language, PlainText, optional_text};
use crate::forms::{FormError, required};

/// JSON body for creating or updating a counter. `lang` is ignored on update.
#[derive(Debug, Deserialize, Validate)]
pub struct StatisticForm {
    #[serde(default)]
    pub lang: Language,
    #[validate(length(min = 1))]
    pub label: String,
    #[validate(range(min = 0))]
    pub value: i32,
    pub suffix: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl TryFrom<StatisticForm> for NewStatistic {
    type Error = FormError;

    fn try_from(form: StatisticForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            lang: form.lang,
            label: required("label", form.label, PlainText::new)?,
            value: form.value,
            suffix: optional_text(form.suffix),
            icon: optional_text(form.icon),
            sort_order: form.sort_order,
        })
    }
}

impl TryFrom<StatisticForm> for UpdateStatistic {
    type Error = FormError;

    fn try_from(form: StatisticForm) -> Result<Self, Self::Error> {
        let statistic = NewStatistic::try_from(form)?;
        Ok(Self {
            label: statistic.label,
            value: statistic.value,
            suffix: statistic.suffix,
            icon: statistic.icon,
            sort_order: statistic.sort_order,
        })
    }
}
