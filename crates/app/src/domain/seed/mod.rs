//! Seed Data
//!
//! Wipes every table and loads the demo catalog, restaurants and admin
//! account in a single transaction.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::SeedError;
pub use service::*;
