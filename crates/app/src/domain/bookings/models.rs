//! Booking Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU32,
    str::FromStr,
};

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    domain::{accounts::models::UserId, catalog::models::RestaurantId},
    ids::TypedId,
};

/// Booking Id
pub type BookingId = TypedId<Booking>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("party size must be a positive integer")]
pub struct InvalidPartySize;

/// Number of guests, at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartySize(NonZeroU32);

impl PartySize {
    /// # Errors
    ///
    /// Returns [`InvalidPartySize`] for anything below one.
    pub fn from_i64(size: i64) -> Result<Self, InvalidPartySize> {
        u32::try_from(size)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(InvalidPartySize)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PartySize {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

/// Bookings are confirmed on creation and never change state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingStatus {
    #[default]
    Confirmed,
}

impl BookingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
        }
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown booking status: {0}")]
pub struct UnknownBookingStatus(String);

impl FromStr for BookingStatus {
    type Err = UnknownBookingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Confirmed" => Ok(Self::Confirmed),
            other => Err(UnknownBookingStatus(other.to_string())),
        }
    }
}

/// Booking Model
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
    pub restaurant_name: String,
    /// Requested date, as entered.
    pub date: String,
    /// Requested time, as entered.
    pub time: String,
    pub party_size: PartySize,
    pub status: BookingStatus,
    pub created_at: Timestamp,
}

/// New Booking Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub restaurant_id: RestaurantId,
    pub date: String,
    pub time: String,
    pub party_size: PartySize,
}
