//! Carts service errors.

use thiserror::Error;

use crate::domain::{
    carts::models::InvalidQuantity, catalog::CatalogServiceError,
    sessions::errors::SessionStoreError,
};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("catalog item not found")]
    NotFound,

    #[error(transparent)]
    InvalidQuantity(#[from] InvalidQuantity),

    #[error("session store error")]
    Session(#[from] SessionStoreError),

    #[error("catalog error")]
    Catalog(#[source] CatalogServiceError),
}

impl From<CatalogServiceError> for CartsServiceError {
    fn from(error: CatalogServiceError) -> Self {
        match error {
            CatalogServiceError::NotFound => Self::NotFound,
            error => Self::Catalog(error),
        }
    }
}
