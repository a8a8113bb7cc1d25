//! Catalog Handlers

pub(crate) mod get;
pub(crate) mod home;
pub(crate) mod index;
pub(crate) mod restaurants;
pub(crate) mod search;
