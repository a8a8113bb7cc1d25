//! Admin Handlers

pub(crate) mod items;
