//! Bookings

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::BookingsServiceError;
pub use service::*;
