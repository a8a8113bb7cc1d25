//! Accounts

mod credentials;
pub mod errors;
pub mod models;
pub(crate) mod repository;
pub mod service;

pub use credentials::{hash_password, verify_password};
pub use errors::AccountsServiceError;
pub use service::*;
