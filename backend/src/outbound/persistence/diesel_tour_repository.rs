//! PostgreSQL-backed `TourRepository` implementation using Diesel ORM.
//!
//! Filters are pushed into SQL; bounds are inclusive to match
//! [`TourFilter::matches`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{TourRepository, TourRepositoryError};
use crate::domain::{Tour, TourAggregate, TourFilter, TourId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{RowError, TourRow, to_i32};
use super::pool::{DbPool, PoolError};
use super::schema::tours;

/// Diesel-backed implementation of the `TourRepository` port.
#[derive(Clone)]
pub struct DieselTourRepository {
    pool: DbPool,
}

impl DieselTourRepository {
    /// Create an adapter over an established pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TourRepositoryError {
    map_basic_pool_error(error, TourRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TourRepositoryError {
    map_basic_diesel_error(
        error,
        TourRepositoryError::query,
        TourRepositoryError::connection,
    )
}

fn map_row_error(error: RowError) -> TourRepositoryError {
    warn!(%error, "stored tour row rejected");
    TourRepositoryError::query(error.to_string())
}

fn rows_to_tours(rows: Vec<TourRow>) -> Result<Vec<Tour>, TourRepositoryError> {
    rows.into_iter()
        .map(|row| Tour::try_from(row).map_err(map_row_error))
        .collect()
}

#[async_trait]
impl TourRepository for DieselTourRepository {
    async fn find_by_id(&self, id: &TourId) -> Result<Option<Tour>, TourRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TourRow> = tours::table
            .filter(tours::id.eq(id.as_uuid()))
            .select(TourRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(|row| Tour::try_from(row).map_err(map_row_error))
            .transpose()
    }

    async fn find_by_ids(&self, ids: &[TourId]) -> Result<Vec<Tour>, TourRepositoryError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TourRow> = tours::table
            .filter(tours::id.eq_any(uuids))
            .select(TourRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_tours(rows)
    }

    async fn list(&self, filter: &TourFilter) -> Result<Vec<Tour>, TourRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = tours::table.select(TourRow::as_select()).into_boxed();
        if let Some(category) = filter.category {
            query = query.filter(tours::category.eq(category.as_str()));
        }
        if let Some(min) = filter.min_price {
            query = query.filter(tours::price.ge(min));
        }
        if let Some(max) = filter.max_price {
            query = query.filter(tours::price.le(max));
        }
        if let Some(min) = filter.min_duration {
            let min = i32::try_from(min).unwrap_or(i32::MAX);
            query = query.filter(tours::duration.ge(min));
        }
        if let Some(max) = filter.max_duration {
            let max = i32::try_from(max).unwrap_or(i32::MAX);
            query = query.filter(tours::duration.le(max));
        }
        if let Some(featured) = filter.featured {
            query = query.filter(tours::featured.eq(featured));
        }

        let rows: Vec<TourRow> = query
            .order((tours::created_at.desc(), tours::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_tours(rows)
    }

    async fn update_aggregate(
        &self,
        id: &TourId,
        aggregate: TourAggregate,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, TourRepositoryError> {
        let reviews_count =
            to_i32(aggregate.reviews_count, "tours.reviews_count").map_err(map_row_error)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(tours::table.filter(tours::id.eq(id.as_uuid())))
            .set((
                tours::rating.eq(aggregate.rating),
                tours::reviews_count.eq(reviews_count),
                tours::updated_at.eq(updated_at),
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
    fn build_failure_is_a_connection_error() {
        let err = map_pool_error(PoolError::build("bad url"));
        assert_eq!(err, TourRepositoryError::connection("bad url"));
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let err = map_diesel_error(fake_database_error(DatabaseErrorKind::ClosedConnection));
        assert!(matches!(err, TourRepositoryError::Connection { .. }));
    }
}
