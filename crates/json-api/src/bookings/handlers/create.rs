//! Create Booking Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use foodwheels_app::domain::catalog::models::RestaurantId;

use crate::{
    bookings::{
        errors::into_status_error,
        models::{BookingRequest, BookingResponse},
    },
    extensions::*,
    state::State,
};

/// Create Booking Handler
///
/// Reserves a table. Bookings are confirmed immediately and the same slot can
/// be booked any number of times.
#[endpoint(
    tags("bookings"),
    summary = "Book A Table",
    responses(
        (status_code = StatusCode::CREATED, description = "Booking confirmed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid party size"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Login required"),
        (status_code = StatusCode::NOT_FOUND, description = "No such restaurant"),
    ),
)]
pub(crate) async fn handler(
    restaurant: PathParam<i64>,
    json: JsonBody<BookingRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    let booking = json
        .into_inner()
        .into_new_booking(RestaurantId::from_i64(restaurant.into_inner()))?;

    let booking = state
        .app
        .bookings
        .create_booking(user, booking)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/bookings/{}", booking.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(booking.into()))
}
