//! PostgreSQL-backed `BookingRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{BookingRepository, BookingRepositoryError};
use crate::domain::{Booking, BookingId, BookingStatus, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{BookingRow, NewBookingRow, RowError};
use super::pool::{DbPool, PoolError};
use super::schema::bookings;

/// Diesel-backed implementation of the `BookingRepository` port.
#[derive(Clone)]
pub struct DieselBookingRepository {
    pool: DbPool,
}

impl DieselBookingRepository {
    /// Create an adapter over an established pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookingRepositoryError {
    map_basic_pool_error(error, BookingRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> BookingRepositoryError {
    map_basic_diesel_error(
        error,
        BookingRepositoryError::query,
        BookingRepositoryError::connection,
    )
}

fn map_row_error(error: RowError) -> BookingRepositoryError {
    warn!(%error, "stored booking row rejected");
    BookingRepositoryError::query(error.to_string())
}

fn rows_to_bookings(rows: Vec<BookingRow>) -> Result<Vec<Booking>, BookingRepositoryError> {
    rows.into_iter()
        .map(|row| Booking::try_from(row).map_err(map_row_error))
        .collect()
}

#[async_trait]
impl BookingRepository for DieselBookingRepository {
    async fn insert(&self, booking: &Booking) -> Result<(), BookingRepositoryError> {
        let row = NewBookingRow::from_booking(booking).map_err(map_row_error)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(bookings::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BookingRow> = bookings::table
            .filter(bookings::id.eq(id.as_uuid()))
            .select(BookingRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(|row| Booking::try_from(row).map_err(map_row_error))
            .transpose()
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BookingRow> = bookings::table
            .filter(bookings::user_id.eq(owner.as_uuid()))
            .order((bookings::created_at.desc(), bookings::id.desc()))
            .select(BookingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_bookings(rows)
    }

    async fn list_all(&self) -> Result<Vec<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BookingRow> = bookings::table
            .order((bookings::created_at.desc(), bookings::id.desc()))
            .select(BookingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_bookings(rows)
    }

    async fn update_status(
        &self,
        id: &BookingId,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(bookings::table.filter(bookings::id.eq(id.as_uuid())))
            .set((
                bookings::status.eq(status.as_str()),
                bookings::updated_at.eq(updated_at),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::persistence::diesel_basic_error_mapping::fake_database_error;
    use diesel::result::DatabaseErrorKind;
    use rstest::rstest;

    #[rstest]
    fn checkout_failure_is_a_connection_error() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, BookingRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn check_violation_is_a_query_error() {
        let err = map_diesel_error(fake_database_error(DatabaseErrorKind::CheckViolation));
        assert!(matches!(err, BookingRepositoryError::Query { .. }));
    }

    #[rstest]
    fn rejected_row_reports_reason() {
        let err = map_row_error(RowError::OutOfRange {
            column: "bookings.number_of_people",
        });
        assert!(err.to_string().contains("bookings.number_of_people"));
    }
}
