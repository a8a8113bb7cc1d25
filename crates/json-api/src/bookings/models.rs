//! Booking request and response bodies

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use foodwheels_app::domain::{
    bookings::models::{Booking, NewBooking, PartySize},
    catalog::models::RestaurantId,
};

use crate::extensions::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingRequest {
    /// Requested date, e.g. `2026-11-01`
    pub date: String,

    /// Requested time, e.g. `19:30`
    pub time: String,

    /// Number of guests; defaults to 1
    pub party_size: Option<i64>,
}

impl BookingRequest {
    pub(crate) fn into_new_booking(
        self,
        restaurant_id: RestaurantId,
    ) -> Result<NewBooking, StatusError> {
        let party_size = self
            .party_size
            .map(PartySize::from_i64)
            .transpose()
            .or_400("invalid party size")?
            .unwrap_or_default();

        Ok(NewBooking {
            restaurant_id,
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            party_size,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingResponse {
    pub id: i64,
    pub restaurant_id: i64,
    pub restaurant_name: String,
    pub date: String,
    pub time: String,
    pub party_size: u32,

    /// Always `Confirmed`
    pub status: String,

    pub created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        BookingResponse {
            id: booking.id.into_i64(),
            restaurant_id: booking.restaurant_id.into_i64(),
            restaurant_name: booking.restaurant_name,
            date: booking.date,
            time: booking.time,
            party_size: booking.party_size.get(),
            status: booking.status.to_string(),
            created_at: booking.created_at.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    fn request(party_size: Option<i64>) -> BookingRequest {
        BookingRequest {
            date: "2026-11-01".to_string(),
            time: "19:30".to_string(),
            party_size,
        }
    }

    #[test]
    fn party_size_defaults_to_one() -> TestResult {
        let booking = request(None).into_new_booking(RestaurantId::from_i64(1))?;

        assert_eq!(booking.party_size.get(), 1);

        Ok(())
    }

    #[test]
    fn zero_party_size_is_rejected() {
        let error = request(Some(0))
            .into_new_booking(RestaurantId::from_i64(1))
            .err();

        assert_eq!(error.map(|e| e.code), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn free_form_date_and_time_are_kept() -> TestResult {
        let mut loose = request(Some(2));
        loose.date = "next friday".to_string();
        loose.time = " ".to_string();

        let booking = loose.into_new_booking(RestaurantId::from_i64(1))?;

        assert_eq!(booking.date, "next friday");
        assert_eq!(booking.time, "");
        assert_eq!(booking.party_size.get(), 2);

        Ok(())
    }
}
