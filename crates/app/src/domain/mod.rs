//! Domain Concerns

pub mod accounts;
pub mod bookings;
pub mod carts;
pub mod catalog;
pub mod orders;
pub mod seed;
pub mod sessions;
