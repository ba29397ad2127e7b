use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use serde::Deserialize;

use crate::domain::about::{NewAboutBlock, SaveAbout};
use crate::domain::types::{Language, PlainText, Title};
use crate::forms::{FormError, image, json_field, required, text};
use crate::uploads::UploadedImage;

/// One entry of the `blocks` JSON array.
#[derive(Debug, Deserialize)]
pub struct AboutBlockForm {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

/// Multipart body of `PUT /api/about`.
#[derive(MultipartForm)]
pub struct SaveAboutForm {
    pub title: Text<String>,
    pub subtitle: Option<Text<String>>,
    pub description: Text<String>,
    /// JSON array of blocks; replaces the stored blocks when present.
    pub blocks: Option<Text<String>>,
    pub image: Option<TempFile>,
}

pub struct SaveAboutPayload {
    /// Text fields; `image` is filled in once the upload is stored.
    pub about: SaveAbout,
    pub image: Option<UploadedImage>,
}

impl SaveAboutForm {
    pub fn into_payload(self, lang: Language) -> Result<SaveAboutPayload, FormError> {
        let blocks = json_field::<Vec<AboutBlockForm>>("blocks", self.blocks)?
            .map(|blocks| {
                blocks
                    .into_iter()
                    .enumerate()
                    .map(|(index, block)| {
                        Ok(NewAboutBlock {
                            title: required("blocks.title", block.title, Title::new)?,
                            content: required("blocks.content", block.content, PlainText::new)?,
                            sort_order: block.sort_order.unwrap_or(index as i32),
                        })
                    })
                    .collect::<Result<Vec<_>, FormError>>()
            })
            .transpose()?;

        Ok(SaveAboutPayload {
            about: SaveAbout {
                lang,
                title: required("title", self.title.into_inner(), Title::new)?,
                subtitle: text(self.subtitle),
                description: required("description", self.description.into_inner(), PlainText::new)?,
                image: None,
                blocks,
            },
            image: image(self.image),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(blocks: Option<&str>) -> SaveAboutForm {
        SaveAboutForm {
            title: Text("About us".to_string()),
            subtitle: Some(Text(" ".to_string())),
            description: Text("We build things".to_string()),
            blocks: blocks.map(|b| Text(b.to_string())),
            image: None,
        }
    }

    #[test]
    fn blocks_default_to_their_position() {
        let payload = form(Some(
            r#"[{"title":"Vision","content":"Lead"},{"title":"Mission","content":"Serve","sort_order":7}]"#,
        ))
        .into_payload(Language::En)
        .unwrap();

        let blocks = payload.about.blocks.unwrap();
        assert_eq!(blocks[0].sort_order, 0);
        assert_eq!(blocks[1].sort_order, 7);
        assert_eq!(payload.about.subtitle, None);
        assert_eq!(payload.about.lang, Language::En);
        assert!(payload.image.is_none());
    }

    #[test]
    fn missing_blocks_keep_stored_ones() {
        let payload = form(None).into_payload(Language::Ar).unwrap();
        assert!(payload.about.blocks.is_none());
    }

    #[test]
    fn empty_block_title_is_rejected() {
        let result = form(Some(r#"[{"title":" ","content":"x"}]"#)).into_payload(Language::Ar);
        assert!(matches!(result, Err(FormError::Required("blocks.title"))));
    }
}
