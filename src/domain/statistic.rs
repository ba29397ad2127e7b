use serde::{Deserialize, Serialize};

use crate::domain::types::{Language, PlainText, StatisticId};

/// Animated counter ("250+ projects").
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Statistic {
    pub id: StatisticId,
    pub lang: Language,
    pub label: String,
    pub value: i32,
    pub suffix: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewStatistic {
    pub lang: Language,
    pub label: PlainText,
    pub value: i32,
    pub suffix: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateStatistic {
    pub label: PlainText,
    pub value: i32,
    pub suffix: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
}
