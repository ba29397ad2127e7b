use serde::Deserialize;
use validator::Validate;

use crate::domain::feature::{NewFeatureItem, NewFeatureSection, UpdateFeatureSection};
use crate::domain::types::{Language, PlainText, Title, optional_text};
use crate::forms::{FormError, required};

/// JSON body of `POST /api/features`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFeatureSectionForm {
    #[serde(default)]
    pub lang: Language,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    /// Initial item lines, ordered as sent.
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFeatureSectionForm {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddFeatureItemForm {
    #[validate(length(min = 1))]
    pub content: String,
    pub sort_order: Option<i32>,
}

impl TryFrom<CreateFeatureSectionForm> for NewFeatureSection {
    type Error = FormError;

    fn try_from(form: CreateFeatureSectionForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let items = form
            .items
            .into_iter()
            .enumerate()
            .map(|(index, content)| {
                Ok(NewFeatureItem {
                    content: required("items", content, PlainText::new)?,
                    sort_order: index as i32,
                })
            })
            .collect::<Result<Vec<_>, FormError>>()?;

        Ok(Self {
            lang: form.lang,
            title: required("title", form.title, Title::new)?,
            description: optional_text(form.description),
            sort_order: form.sort_order,
            items,
        })
    }
}

impl TryFrom<UpdateFeatureSectionForm> for UpdateFeatureSection {
    type Error = FormError;

    fn try_from(form: UpdateFeatureSectionForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            title: required("title", form.title, Title::new)?,
            description: optional_text(form.description),
            sort_order: form.sort_order,
        })
    }
}

impl AddFeatureItemForm {
    /// Items without an explicit position go after `next_position - 1`.
    pub fn into_domain(self, next_position: i32) -> Result<NewFeatureItem, FormError> {
        self.validate()?;
        Ok(NewFeatureItem {
            content: required("content", self.content, PlainText::new)?,
            sort_order: self.sort_order.unwrap_or(next_position),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_keep_sent_order() {
        let form: CreateFeatureSectionForm =
            serde_json::from_str(r#"{"lang":"en","title":"Quality","items":["ISO","Audits"]}"#)
                .unwrap();
        let section = NewFeatureSection::try_from(form).unwrap();
        assert_eq!(section.lang, Language::En);
        assert_eq!(section.items.len(), 2);
        assert_eq!(section.items[1].sort_order, 1);
        assert_eq!(section.items[1].content.as_str(), "Audits");
    }

    #[test]
    fn blank_item_is_rejected() {
        let form: CreateFeatureSectionForm =
            serde_json::from_str(r#"{"title":"Quality","items":[" "]}"#).unwrap();
        assert!(matches!(
            NewFeatureSection::try_from(form),
            Err(FormError::Required("items"))
        ));
    }

    #[test]
    fn item_position_defaults_to_end() {
        let form = AddFeatureItemForm {
            content: "Support".into(),
            sort_order: None,
        };
        assert_eq!(form.into_domain(3).unwrap().sort_order, 3);
    }
}
