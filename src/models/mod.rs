//! Database models shared across the site repository.

pub mod about;
pub mod blog;
pub mod certificate;
pub mod company_intro;
pub mod config;
pub mod contact;
pub mod feature;
pub mod header_link;
pub mod project;
pub mod service;
pub mod statistic;
pub mod story;
pub mod team;

/// Decodes a JSON array of upload paths stored in a text column.
///
/// Malformed column contents decode to an empty gallery.
pub(crate) fn decode_paths(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Encodes upload paths into the JSON text stored in the database.
pub(crate) fn encode_paths(paths: &[String]) -> String {
    serde_json::to_string(paths).unwrap_or_else(|_| "[]".to_string())
}
