//! Driving port for public review reads.

use async_trait::async_trait;

use crate::domain::{Error, TourId, TourReview};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewQuery: Send + Sync {
    /// Reviews of a tour with author names, newest first. No identity needed.
    async fn list_for_tour(&self, tour_id: &TourId) -> Result<Vec<TourReview>, Error>;
}
