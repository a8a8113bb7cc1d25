//! List Bookings Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    bookings::{errors::into_status_error, models::BookingResponse},
    extensions::*,
    state::State,
};

/// List Bookings Handler
///
/// The logged-in user's bookings, most recently made first.
#[endpoint(tags("bookings"), summary = "List Bookings")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<BookingResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    let bookings = state
        .app
        .bookings
        .list_bookings(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}
