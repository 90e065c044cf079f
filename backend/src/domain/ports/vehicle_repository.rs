//! Port for vehicle catalogue reads.

use async_trait::async_trait;

use crate::domain::{Vehicle, VehicleFilter, VehicleId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by vehicle repository adapters.
    pub enum VehicleRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "vehicle repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "vehicle repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_by_id(&self, id: &VehicleId) -> Result<Option<Vehicle>, VehicleRepositoryError>;

    /// Fetch several vehicles at once. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[VehicleId])
    -> Result<Vec<Vehicle>, VehicleRepositoryError>;

    /// Vehicles matching `filter`, newest first.
    async fn list(&self, filter: &VehicleFilter) -> Result<Vec<Vehicle>, VehicleRepositoryError>;
}
