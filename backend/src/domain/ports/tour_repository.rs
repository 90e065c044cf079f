//! Port for tour catalogue reads and aggregate writes.
//!
//! Tour records are authored elsewhere; this backend only reads them and
//! writes back the two review-derived fields via
//! [`TourRepository::update_aggregate`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Tour, TourAggregate, TourFilter, TourId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by tour repository adapters.
    pub enum TourRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "tour repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "tour repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TourRepository: Send + Sync {
    async fn find_by_id(&self, id: &TourId) -> Result<Option<Tour>, TourRepositoryError>;

    /// Fetch several tours at once. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[TourId]) -> Result<Vec<Tour>, TourRepositoryError>;

    /// Tours matching `filter`, newest first.
    async fn list(&self, filter: &TourFilter) -> Result<Vec<Tour>, TourRepositoryError>;

    /// Write `rating`, `reviews_count` and `updated_at` in one update.
    ///
    /// Returns `false` when the tour does not exist.
    async fn update_aggregate(
        &self,
        id: &TourId,
        aggregate: TourAggregate,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, TourRepositoryError>;
}
