//! Catalog
//!
//! Menu items and restaurants. Items are grouped by a category tag and an
//! optional sub-tag; the home page tiles are items tagged `Category`.

pub mod errors;
pub mod models;
pub(crate) mod repository;
pub mod service;

pub use errors::CatalogServiceError;
pub use service::*;
