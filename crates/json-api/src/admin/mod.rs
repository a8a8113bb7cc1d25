//! Admin catalog editing

mod handlers;
pub(crate) mod models;

pub(crate) use handlers::*;
