//! Driving port for booking reads.

use async_trait::async_trait;

use crate::domain::{BookingDetail, BookingId, BookingListing, Error, Requester};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// The requester's own bookings, newest first.
    async fn list_mine(&self, requester: &Requester) -> Result<Vec<BookingListing>, Error>;

    /// Every booking with owner details, newest first. Administrators only.
    async fn list_all(&self, requester: &Requester) -> Result<Vec<BookingListing>, Error>;

    /// One booking with every reference resolved. Owner or administrator.
    async fn get(&self, requester: &Requester, id: &BookingId) -> Result<BookingDetail, Error>;
}
