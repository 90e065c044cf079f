//! Read-only tour and vehicle catalogue service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use super::ports::{CatalogueQuery, TourRepository, VehicleRepository};
use super::store_errors::{map_tour_error, map_vehicle_error};
use super::{Error, Tour, TourFilter, TourId, Vehicle, VehicleFilter, VehicleId};

/// Catalogue service implementing [`CatalogueQuery`].
#[derive(Clone)]
pub struct CatalogueService<T, V> {
    tours: Arc<T>,
    vehicles: Arc<V>,
}

impl<T, V> CatalogueService<T, V> {
    /// Create a read-only service over the tour and vehicle stores.
    pub fn new(tours: Arc<T>, vehicles: Arc<V>) -> Self {
        Self { tours, vehicles }
    }
}

#[async_trait]
impl<T, V> CatalogueQuery for CatalogueService<T, V>
where
    T: TourRepository,
    V: VehicleRepository,
{
    async fn list_tours(&self, filter: &TourFilter) -> Result<Vec<Tour>, Error> {
        self.tours.list(filter).await.map_err(map_tour_error)
    }

    async fn get_tour(&self, id: &TourId) -> Result<Tour, Error> {
        self.tours
            .find_by_id(id)
            .await
            .map_err(map_tour_error)?
            .ok_or_else(|| Error::not_found("tour not found").with_details(json!({ "tourId": id })))
    }

    async fn list_vehicles(&self, filter: &VehicleFilter) -> Result<Vec<Vehicle>, Error> {
        self.vehicles.list(filter).await.map_err(map_vehicle_error)
    }

    async fn get_vehicle(&self, id: &VehicleId) -> Result<Vehicle, Error> {
        self.vehicles
            .find_by_id(id)
            .await
            .map_err(map_vehicle_error)?
            .ok_or_else(|| {
                Error::not_found("vehicle not found").with_details(json!({ "vehicleId": id }))
            })
    }
}
