//! Errors

use salvo::http::StatusError;
use tracing::error;

use foodwheels_app::domain::bookings::BookingsServiceError;

pub(crate) fn into_status_error(error: BookingsServiceError) -> StatusError {
    match error {
        BookingsServiceError::NotFound => StatusError::not_found().brief("Booking not found"),
        BookingsServiceError::UnknownRestaurant => {
            StatusError::not_found().brief("Restaurant not found")
        }
        BookingsServiceError::MissingRequiredData | BookingsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid booking payload")
        }
        BookingsServiceError::Sql(source) => {
            error!("booking storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
