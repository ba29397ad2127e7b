//! DTOs shared by the HTTP handlers.

pub mod api;
