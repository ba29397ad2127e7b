//! Domain entities exposed by the site service layer.

pub mod about;
pub mod blog;
pub mod certificate;
pub mod company_intro;
pub mod contact;
pub mod feature;
pub mod header_link;
pub mod project;
pub mod service;
pub mod statistic;
pub mod story;
pub mod team;
pub mod types;
