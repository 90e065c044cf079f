//! Driving port for public tour and vehicle reads.

use async_trait::async_trait;

use crate::domain::{Error, Tour, TourFilter, TourId, Vehicle, VehicleFilter, VehicleId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    async fn list_tours(&self, filter: &TourFilter) -> Result<Vec<Tour>, Error>;

    /// Fails with `not_found` for an unknown id.
    async fn get_tour(&self, id: &TourId) -> Result<Tour, Error>;

    async fn list_vehicles(&self, filter: &VehicleFilter) -> Result<Vec<Vehicle>, Error>;

    /// Fails with `not_found` for an unknown id.
    async fn get_vehicle(&self, id: &VehicleId) -> Result<Vehicle, Error>;
}
