//! Port for review persistence.
//!
//! Adapters must enforce uniqueness of `(tour_id, user_id)` themselves and
//! report a violation as [`ReviewRepositoryError::DuplicateReview`]. The
//! review service checks for an existing review before inserting, but two
//! concurrent requests can both pass that check; the store is the guard that
//! decides which insert wins.

use async_trait::async_trait;

use crate::domain::{Review, ReviewId, TourId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by review repository adapters.
    pub enum ReviewRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "review repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "review repository query failed: {message}",
        /// The user already has a review for the tour.
        DuplicateReview { message: String } =>
            "duplicate review: {message}",
        /// The reviewed tour no longer exists.
        MissingTour { message: String } =>
            "reviewed tour missing: {message}",
    }
}

/// Storage contract for reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Persist a new review, failing with `DuplicateReview` when the author
    /// already reviewed the tour and `MissingTour` when the tour is gone.
    async fn insert(&self, review: &Review) -> Result<(), ReviewRepositoryError>;

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewRepositoryError>;

    /// The review `user_id` wrote for `tour_id`, if any.
    async fn find_by_tour_and_user(
        &self,
        tour_id: &TourId,
        user_id: &UserId,
    ) -> Result<Option<Review>, ReviewRepositoryError>;

    /// Reviews currently referencing `tour_id`, newest first.
    async fn list_for_tour(&self, tour_id: &TourId) -> Result<Vec<Review>, ReviewRepositoryError>;

    /// Remove a review. Returns `false` when it did not exist.
    async fn delete(&self, id: &ReviewId) -> Result<bool, ReviewRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_error_keeps_context() {
        let err = ReviewRepositoryError::duplicate_review("reviews_tour_user_key");
        assert_eq!(err.to_string(), "duplicate review: reviews_tour_user_key");
    }
}
