//! Rentable vehicles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::VehicleId;
use super::labels::define_label_enum;

define_label_enum! {
    /// Body style offered for rental.
    VehicleType, "vehicle type" {
        Car => "Car",
        Van => "Van",
        Suv => "SUV",
        Bus => "Bus",
        LuxuryCar => "Luxury Car",
    }
}

define_label_enum! {
    /// Gearbox kind.
    Transmission, "transmission" {
        Manual => "Manual",
        Automatic => "Automatic",
    }
}

define_label_enum! {
    /// Propulsion kind.
    FuelType, "fuel type" {
        Petrol => "Petrol",
        Diesel => "Diesel",
        Electric => "Electric",
        Hybrid => "Hybrid",
    }
}

/// Catalogue entry for a rentable vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub description: String,
    pub price_per_day: f64,
    /// Seats including the driver.
    pub capacity: u32,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub available: bool,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Project the fields shown next to a booking.
    pub fn summary(&self) -> VehicleSummary {
        VehicleSummary {
            id: self.id,
            name: self.name.clone(),
            vehicle_type: self.vehicle_type,
            price_per_day: self.price_per_day,
        }
    }
}

/// Display subset of a vehicle used in booking listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    pub id: VehicleId,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub price_per_day: f64,
}

/// Catalogue query. Unset fields do not constrain the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VehicleFilter {
    pub vehicle_type: Option<VehicleType>,
    pub available: Option<bool>,
}

impl VehicleFilter {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.vehicle_type.is_none_or(|t| vehicle.vehicle_type == t)
            && self.available.is_none_or(|a| vehicle.available == a)
    }
}
