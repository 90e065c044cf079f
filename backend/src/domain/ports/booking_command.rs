//! Driving port for booking mutations.
//!
//! Inbound adapters resolve the caller's identity and hand it over as a
//! [`Requester`]; every ownership and role check happens behind this port.

use async_trait::async_trait;

use crate::domain::{Booking, BookingDraft, BookingId, BookingStatus, Error, Requester};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Validate and store a booking owned by the requester.
    async fn create(&self, requester: &Requester, draft: BookingDraft) -> Result<Booking, Error>;

    /// Set any status on a booking. Administrators only.
    async fn update_status(
        &self,
        requester: &Requester,
        id: &BookingId,
        status: BookingStatus,
    ) -> Result<Booking, Error>;

    /// Mark a booking cancelled. Owner or administrator; idempotent.
    async fn cancel(&self, requester: &Requester, id: &BookingId) -> Result<Booking, Error>;
}
