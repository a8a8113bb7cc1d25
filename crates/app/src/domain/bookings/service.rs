//! Bookings service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        accounts::models::UserId,
        bookings::{
            errors::BookingsServiceError,
            models::{Booking, BookingId, NewBooking},
            repository::SqliteBookingsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct SqliteBookingsService {
    db: Db,
    repository: SqliteBookingsRepository,
}

impl SqliteBookingsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteBookingsRepository::new(),
        }
    }
}

#[async_trait]
impl BookingsService for SqliteBookingsService {
    async fn create_booking(
        &self,
        user: UserId,
        booking: NewBooking,
    ) -> Result<Booking, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let id = self
            .repository
            .create_booking(&mut tx, user, &booking, Timestamp::now())
            .await?;

        let created = self.repository.get_booking(&mut tx, user, id).await?;

        tx.commit().await?;

        info!(
            booking = %created.id,
            restaurant = %created.restaurant_id,
            party_size = created.party_size.get(),
            "booking created"
        );

        Ok(created)
    }

    async fn get_booking(
        &self,
        user: UserId,
        booking: BookingId,
    ) -> Result<Booking, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let booking = self.repository.get_booking(&mut tx, user, booking).await?;

        tx.commit().await?;

        Ok(booking)
    }

    async fn list_bookings(&self, user: UserId) -> Result<Vec<Booking>, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let bookings = self.repository.list_bookings(&mut tx, user).await?;

        tx.commit().await?;

        Ok(bookings)
    }
}

#[automock]
#[async_trait]
pub trait BookingsService: Send + Sync {
    /// Reserve a table. No availability checks are made.
    async fn create_booking(
        &self,
        user: UserId,
        booking: NewBooking,
    ) -> Result<Booking, BookingsServiceError>;

    /// Retrieve one of the user's bookings.
    async fn get_booking(
        &self,
        user: UserId,
        booking: BookingId,
    ) -> Result<Booking, BookingsServiceError>;

    /// The user's bookings, most recently created first.
    async fn list_bookings(&self, user: UserId) -> Result<Vec<Booking>, BookingsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            bookings::models::{BookingStatus, PartySize},
            catalog::models::{Restaurant, RestaurantId},
        },
        test::{
            TestContext,
            helpers::{create_restaurant, create_user},
        },
    };

    use super::*;

    fn new_booking(restaurant: &Restaurant, party_size: i64) -> TestResult<NewBooking> {
        Ok(NewBooking {
            restaurant_id: restaurant.id,
            date: "2026-11-02".to_string(),
            time: "19:30".to_string(),
            party_size: PartySize::from_i64(party_size)?,
        })
    }

    #[tokio::test]
    async fn create_booking_is_confirmed() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada@example.com").await?;
        let restaurant = create_restaurant(&ctx, "Sushi Zen").await?;

        let booking = ctx
            .bookings
            .create_booking(user.id, new_booking(&restaurant, 4)?)
            .await?;

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.party_size.get(), 4);
        assert_eq!(booking.restaurant_name, "Sushi Zen");
        assert_eq!(booking.date, "2026-11-02");
        assert_eq!(booking.time, "19:30");

        Ok(())
    }

    #[tokio::test]
    async fn same_slot_can_be_booked_repeatedly() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada@example.com").await?;
        let restaurant = create_restaurant(&ctx, "Sushi Zen").await?;

        for _ in 0..3 {
            ctx.bookings
                .create_booking(user.id, new_booking(&restaurant, 2)?)
                .await?;
        }

        assert_eq!(ctx.bookings.list_bookings(user.id).await?.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_restaurant_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada@example.com").await?;

        let result = ctx
            .bookings
            .create_booking(
                user.id,
                NewBooking {
                    restaurant_id: RestaurantId::from_i64(404),
                    date: "2026-11-02".to_string(),
                    time: "19:30".to_string(),
                    party_size: PartySize::default(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(BookingsServiceError::UnknownRestaurant)),
            "expected UnknownRestaurant, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_bookings_is_newest_first_and_per_user() -> TestResult {
        let ctx = TestContext::new().await;
        let ada = create_user(&ctx, "ada@example.com").await?;
        let bob = create_user(&ctx, "bob@example.com").await?;
        let restaurant = create_restaurant(&ctx, "Sushi Zen").await?;

        let first = ctx
            .bookings
            .create_booking(ada.id, new_booking(&restaurant, 2)?)
            .await?;
        let second = ctx
            .bookings
            .create_booking(ada.id, new_booking(&restaurant, 6)?)
            .await?;
        ctx.bookings
            .create_booking(bob.id, new_booking(&restaurant, 1)?)
            .await?;

        let bookings = ctx.bookings.list_bookings(ada.id).await?;

        assert_eq!(
            bookings.iter().map(|booking| booking.id).collect::<Vec<_>>(),
            vec![second.id, first.id]
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_booking_of_another_user_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let ada = create_user(&ctx, "ada@example.com").await?;
        let bob = create_user(&ctx, "bob@example.com").await?;
        let restaurant = create_restaurant(&ctx, "Sushi Zen").await?;

        let booking = ctx
            .bookings
            .create_booking(ada.id, new_booking(&restaurant, 2)?)
            .await?;

        let result = ctx.bookings.get_booking(bob.id, booking.id).await;

        assert!(
            matches!(result, Err(BookingsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn party_size_below_one_is_rejected() {
        assert!(PartySize::from_i64(0).is_err(), "zero guests");
        assert!(PartySize::from_i64(-2).is_err(), "negative guests");
        assert_eq!(PartySize::default().get(), 1);
    }
}
