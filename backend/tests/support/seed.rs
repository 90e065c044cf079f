//! Catalogue records and service wiring shared by behaviour suites.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use mockable::{Clock, DefaultClock};
use tourbook::domain::{
    BookingLedgerService, Difficulty, FuelType, ReviewAggregatorService, Tour, TourAggregate,
    TourCategory, TourId, Transmission, Vehicle, VehicleId, VehicleType,
};
use tourbook::outbound::memory::InMemoryStore;

pub type MemoryLedger =
    BookingLedgerService<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore>;
pub type MemoryAggregator = ReviewAggregatorService<InMemoryStore, InMemoryStore, InMemoryStore>;

pub fn run_async<T>(future: impl Future<Output = T>) -> T {
    tokio::runtime::Runtime::new()
        .expect("runtime")
        .block_on(future)
}

fn clock() -> Arc<dyn Clock> {
    Arc::new(DefaultClock)
}

pub fn ledger(store: &Arc<InMemoryStore>) -> MemoryLedger {
    BookingLedgerService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        clock(),
    )
}

pub fn aggregator(store: &Arc<InMemoryStore>) -> MemoryAggregator {
    ReviewAggregatorService::new(store.clone(), store.clone(), store.clone(), clock())
}

pub fn seed_tour(store: &InMemoryStore) -> TourId {
    let id = TourId::random();
    let now = Utc::now();
    store.put_tour(Tour {
        id,
        name: "Sigiriya Sunrise".into(),
        description: "Rock fortress climb at dawn".into(),
        price: 60.0,
        duration: 1,
        category: TourCategory::Cultural,
        max_group_size: 12,
        difficulty: Difficulty::Moderate,
        locations: vec!["Sigiriya".into()],
        included: vec!["Entrance ticket".into()],
        images: Vec::new(),
        featured: false,
        aggregate: TourAggregate::default(),
        created_at: now,
        updated_at: now,
    });
    id
}

pub fn seed_vehicle(store: &InMemoryStore) -> VehicleId {
    let id = VehicleId::random();
    let now = Utc::now();
    store.put_vehicle(Vehicle {
        id,
        name: "Hiace".into(),
        vehicle_type: VehicleType::Van,
        description: "Air-conditioned van".into(),
        price_per_day: 75.0,
        capacity: 9,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Diesel,
        features: vec!["A/C".into()],
        images: Vec::new(),
        available: true,
        rating: 4.5,
        created_at: now,
        updated_at: now,
    });
    id
}
