//! Errors

use salvo::http::StatusError;
use tracing::error;

use foodwheels_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Catalog item not found"),
        CartsServiceError::InvalidQuantity(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        CartsServiceError::Session(source) => {
            error!("failed to read or write cart session: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::Catalog(source) => {
            error!("failed to look up catalog item for cart: {source}");

            StatusError::internal_server_error()
        }
    }
}
