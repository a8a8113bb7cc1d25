//! `FoodWheels` application domain and persistence.

pub(crate) mod columns;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod prices;

#[cfg(test)]
mod test;
