//! Seed errors.

use thiserror::Error;

use crate::prices::PriceError;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed document")]
    Parse(#[from] serde_norway::Error),

    #[error("invalid price for seed item {name:?}")]
    Price {
        name: String,
        #[source]
        source: PriceError,
    },

    #[error("seed value out of range")]
    OutOfRange(#[from] std::num::TryFromIntError),

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
