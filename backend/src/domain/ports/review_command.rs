//! Driving port for review mutations.

use async_trait::async_trait;

use crate::domain::{Error, Requester, Review, ReviewId, TourId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewCommand: Send + Sync {
    /// Post the requester's review of a tour and refresh the tour aggregate.
    ///
    /// Fails with `not_found` for an unknown tour and `conflict` when the
    /// requester already reviewed it.
    async fn create(
        &self,
        requester: &Requester,
        tour_id: TourId,
        rating: u8,
        comment: String,
    ) -> Result<Review, Error>;

    /// Remove a review and refresh the tour aggregate. Owner or administrator.
    async fn delete(&self, requester: &Requester, id: &ReviewId) -> Result<(), Error>;
}
