//! Port for booking persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Booking, BookingId, BookingStatus, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by booking repository adapters.
    pub enum BookingRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "booking repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "booking repository query failed: {message}",
    }
}

/// Storage contract for bookings.
///
/// Listing methods return records ordered newest first by `created_at`.
/// Bookings are never hard deleted, so there is no delete operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking.
    async fn insert(&self, booking: &Booking) -> Result<(), BookingRepositoryError>;

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, BookingRepositoryError>;

    /// Bookings owned by `owner`, newest first.
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Booking>, BookingRepositoryError>;

    /// Every booking, newest first.
    async fn list_all(&self) -> Result<Vec<Booking>, BookingRepositoryError>;

    /// Overwrite the status of a single booking.
    ///
    /// Returns `false` when no booking has the given id.
    async fn update_status(
        &self,
        id: &BookingId,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, BookingRepositoryError>;
}
