//! Get Booking Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use foodwheels_app::domain::bookings::models::BookingId;

use crate::{
    bookings::{errors::into_status_error, models::BookingResponse},
    extensions::*,
    state::State,
};

/// Get Booking Handler
#[endpoint(
    tags("bookings"),
    summary = "Get Booking",
    responses(
        (status_code = StatusCode::OK, description = "Booking found"),
        (status_code = StatusCode::NOT_FOUND, description = "No such booking"),
    ),
)]
pub(crate) async fn handler(
    booking: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    let booking = state
        .app
        .bookings
        .get_booking(user, BookingId::from_i64(booking.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(booking.into()))
}
