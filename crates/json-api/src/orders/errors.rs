//! Errors

use salvo::http::StatusError;
use tracing::error;

use foodwheels_app::domain::orders::OrdersServiceError;

use crate::carts;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::EmptyCart => StatusError::conflict().brief("Cart is empty"),
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::ItemUnavailable(item) => StatusError::not_found()
            .brief(format!("Catalog item {item} is no longer available")),
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Cart(source) => carts::errors::into_status_error(source),
        OrdersServiceError::InvalidPrice(source) => {
            error!("order total out of range: {source}");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
