//! Sessions
//!
//! Per-visitor key/value state: who is logged in and what is in the cart.
//! A session is read in full at the start of an operation and written back
//! in full at its end.

pub mod errors;
pub mod models;
mod store;

pub use errors::SessionStoreError;
pub use store::*;
