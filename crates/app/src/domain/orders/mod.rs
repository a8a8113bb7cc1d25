//! Orders
//!
//! Checkout turns the session cart into an order and its line items. Prices
//! on line items are the cart snapshot, never a fresh catalog read.

pub mod errors;
pub mod models;
mod repositories;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
