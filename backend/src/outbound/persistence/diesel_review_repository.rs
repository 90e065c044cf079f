//! PostgreSQL-backed `ReviewRepository` implementation using Diesel ORM.
//!
//! The unique index on `(tour_id, user_id)` is the authoritative duplicate
//! guard: a unique violation on insert becomes
//! [`ReviewRepositoryError::DuplicateReview`]. A foreign key violation means
//! the tour was deleted after the service checked it and becomes
//! [`ReviewRepositoryError::MissingTour`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{ReviewRepository, ReviewRepositoryError};
use crate::domain::{Review, ReviewId, TourId, UserId};

use super::diesel_basic_error_mapping::{
    DieselFailure, classify_diesel_error, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewReviewRow, ReviewRow, RowError};
use super::pool::{DbPool, PoolError};
use super::schema::reviews;

/// Diesel-backed implementation of the `ReviewRepository` port.
#[derive(Clone)]
pub struct DieselReviewRepository {
    pool: DbPool,
}

impl DieselReviewRepository {
    /// Create a repository over an established pool.
    ///
    /// ```rust,no_run
    /// # use tourbook::outbound::persistence::{DbPool, DieselReviewRepository, PoolConfig};
    /// # async fn example() -> Result<(), tourbook::outbound::persistence::PoolError> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/tourbook")).await?;
    /// let repository = DieselReviewRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ReviewRepositoryError {
    map_basic_pool_error(error, ReviewRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ReviewRepositoryError {
    map_basic_diesel_error(
        error,
        ReviewRepositoryError::query,
        ReviewRepositoryError::connection,
    )
}

fn map_insert_error(error: diesel::result::Error) -> ReviewRepositoryError {
    match classify_diesel_error(&error) {
        DieselFailure::UniqueViolation => {
            ReviewRepositoryError::duplicate_review("review already exists for tour and user")
        }
        DieselFailure::ForeignKeyViolation => {
            ReviewRepositoryError::missing_tour("reviewed tour no longer exists")
        }
        DieselFailure::Connection => ReviewRepositoryError::connection("database connection error"),
        DieselFailure::Query => ReviewRepositoryError::query("database error"),
    }
}

fn row_to_review(row: ReviewRow) -> Result<Review, ReviewRepositoryError> {
    Review::try_from(row).map_err(|error: RowError| {
        warn!(%error, "stored review row rejected");
        ReviewRepositoryError::query(error.to_string())
    })
}

#[async_trait]
impl ReviewRepository for DieselReviewRepository {
    async fn insert(&self, review: &Review) -> Result<(), ReviewRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(reviews::table)
            .values(&NewReviewRow::from(review))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_insert_error)
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ReviewRow> = reviews::table
            .filter(reviews::id.eq(id.as_uuid()))
            .select(ReviewRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_review).transpose()
    }

    async fn find_by_tour_and_user(
        &self,
        tour_id: &TourId,
        user_id: &UserId,
    ) -> Result<Option<Review>, ReviewRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ReviewRow> = reviews::table
            .filter(reviews::tour_id.eq(tour_id.as_uuid()))
            .filter(reviews::user_id.eq(user_id.as_uuid()))
            .select(ReviewRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_review).transpose()
    }

    async fn list_for_tour(&self, tour_id: &TourId) -> Result<Vec<Review>, ReviewRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ReviewRow> = reviews::table
            .filter(reviews::tour_id.eq(tour_id.as_uuid()))
            .order((reviews::created_at.desc(), reviews::id.desc()))
            .select(ReviewRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_review).collect()
    }

    async fn delete(&self, id: &ReviewId) -> Result<bool, ReviewRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(reviews::table.filter(reviews::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::persistence::diesel_basic_error_mapping::fake_database_error;
    use diesel::result::DatabaseErrorKind;
    use rstest::rstest;

    #[rstest]
    fn unique_violation_on_insert_is_duplicate_review() {
        let err = map_insert_error(fake_database_error(DatabaseErrorKind::UniqueViolation));
        assert!(matches!(err, ReviewRepositoryError::DuplicateReview { .. }));
    }

    #[rstest]
    fn foreign_key_violation_on_insert_is_missing_tour() {
        let err = map_insert_error(fake_database_error(
            DatabaseErrorKind::ForeignKeyViolation,
        ));
        assert!(matches!(err, ReviewRepositoryError::MissingTour { .. }));
    }

    #[rstest]
    fn check_violation_on_insert_is_query_error() {
        let err = map_insert_error(fake_database_error(DatabaseErrorKind::CheckViolation));
        assert_eq!(err, ReviewRepositoryError::query("database error"));
    }

    #[rstest]
    fn unique_violation_outside_insert_is_plain_query_error() {
        let err = map_diesel_error(fake_database_error(DatabaseErrorKind::UniqueViolation));
        assert!(matches!(err, ReviewRepositoryError::Query { .. }));
    }
}
