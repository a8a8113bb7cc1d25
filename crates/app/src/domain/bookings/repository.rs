//! Bookings Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query_as, query_scalar, sqlite::SqliteRow};

use crate::{
    columns::{timestamp_to_column, try_get_timestamp},
    domain::{
        accounts::models::UserId,
        bookings::models::{Booking, BookingId, BookingStatus, NewBooking, PartySize},
        catalog::models::RestaurantId,
    },
};

const CREATE_BOOKING_SQL: &str = include_str!("sql/create_booking.sql");
const GET_BOOKING_SQL: &str = include_str!("sql/get_booking.sql");
const LIST_BOOKINGS_SQL: &str = include_str!("sql/list_bookings.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteBookingsRepository;

impl SqliteBookingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_booking(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user: UserId,
        booking: &NewBooking,
        created_at: Timestamp,
    ) -> Result<BookingId, sqlx::Error> {
        let id: i64 = query_scalar(CREATE_BOOKING_SQL)
            .bind(user.into_i64())
            .bind(booking.restaurant_id.into_i64())
            .bind(booking.date.as_str())
            .bind(booking.time.as_str())
            .bind(i64::from(booking.party_size.get()))
            .bind(BookingStatus::Confirmed.as_str())
            .bind(timestamp_to_column(created_at))
            .fetch_one(&mut **tx)
            .await?;

        Ok(BookingId::from_i64(id))
    }

    pub(crate) async fn get_booking(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user: UserId,
        booking: BookingId,
    ) -> Result<Booking, sqlx::Error> {
        query_as::<Sqlite, Booking>(GET_BOOKING_SQL)
            .bind(booking.into_i64())
            .bind(user.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_bookings(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user: UserId,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        query_as::<Sqlite, Booking>(LIST_BOOKINGS_SQL)
            .bind(user.into_i64())
            .fetch_all(&mut **tx)
            .await
    }
}

fn decode_error(col: &str, source: impl std::error::Error + Send + Sync + 'static) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(source),
    }
}

impl<'r> FromRow<'r, SqliteRow> for Booking {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let party_size = PartySize::from_i64(row.try_get("party_size")?)
            .map_err(|e| decode_error("party_size", e))?;
        let status = row
            .try_get::<&str, _>("status")?
            .parse::<BookingStatus>()
            .map_err(|e| decode_error("status", e))?;

        Ok(Self {
            id: BookingId::from_i64(row.try_get("id")?),
            user_id: UserId::from_i64(row.try_get("user_id")?),
            restaurant_id: RestaurantId::from_i64(row.try_get("restaurant_id")?),
            restaurant_name: row.try_get("restaurant_name")?,
            date: row.try_get("booking_date")?,
            time: row.try_get("booking_time")?,
            party_size,
            status,
            created_at: try_get_timestamp(row, "created_at")?,
        })
    }
}
