//! PostgreSQL-backed `VehicleRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{VehicleRepository, VehicleRepositoryError};
use crate::domain::{Vehicle, VehicleFilter, VehicleId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::VehicleRow;
use super::pool::{DbPool, PoolError};
use super::schema::vehicles;

/// Diesel-backed implementation of the `VehicleRepository` port.
#[derive(Clone)]
pub struct DieselVehicleRepository {
    pool: DbPool,
}

impl DieselVehicleRepository {
    /// Create an adapter over an established pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> VehicleRepositoryError {
    map_basic_pool_error(error, VehicleRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> VehicleRepositoryError {
    map_basic_diesel_error(
        error,
        VehicleRepositoryError::query,
        VehicleRepositoryError::connection,
    )
}

fn row_to_vehicle(row: VehicleRow) -> Result<Vehicle, VehicleRepositoryError> {
    Vehicle::try_from(row).map_err(|error| {
        warn!(%error, "stored vehicle row rejected");
        VehicleRepositoryError::query(error.to_string())
    })
}

#[async_trait]
impl VehicleRepository for DieselVehicleRepository {
    async fn find_by_id(&self, id: &VehicleId) -> Result<Option<Vehicle>, VehicleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<VehicleRow> = vehicles::table
            .filter(vehicles::id.eq(id.as_uuid()))
            .select(VehicleRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_vehicle).transpose()
    }

    async fn find_by_ids(&self, ids: &[VehicleId]) -> Result<Vec<Vehicle>, VehicleRepositoryError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<VehicleRow> = vehicles::table
            .filter(vehicles::id.eq_any(uuids))
            .select(VehicleRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_vehicle).collect()
    }

    async fn list(&self, filter: &VehicleFilter) -> Result<Vec<Vehicle>, VehicleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = vehicles::table
            .select(VehicleRow::as_select())
            .into_boxed();
        if let Some(vehicle_type) = filter.vehicle_type {
            query = query.filter(vehicles::vehicle_type.eq(vehicle_type.as_str()));
        }
        if let Some(available) = filter.available {
            query = query.filter(vehicles::available.eq(available));
        }

        let rows: Vec<VehicleRow> = query
            .order((vehicles::created_at.desc(), vehicles::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_vehicle).collect()
    }
}
