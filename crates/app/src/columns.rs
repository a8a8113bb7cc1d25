//! Column decoding helpers

use jiff::Timestamp;
use sqlx::{Row, sqlite::SqliteRow};

/// Timestamps are stored as integer microseconds since the Unix epoch.
pub(crate) fn timestamp_to_column(timestamp: Timestamp) -> i64 {
    timestamp.as_microsecond()
}

pub(crate) fn try_get_timestamp(row: &SqliteRow, col: &str) -> Result<Timestamp, sqlx::Error> {
    let micros: i64 = row.try_get(col)?;

    Timestamp::from_microsecond(micros).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Decode a non-negative integer column (cents, quantities) into `u64`.
pub(crate) fn try_get_amount(row: &SqliteRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
