//! In-process store implementing every repository port.
//!
//! Used when the server starts without a database URL and by the behaviour
//! tests. All collections sit behind one mutex so each port call observes a
//! consistent snapshot; the lock is never held across an `.await`.
//!
//! Review inserts enforce `(tour_id, user_id)` uniqueness and the tour
//! reference inside the lock, matching the unique index and foreign key in
//! PostgreSQL.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{
    BookingRepository, BookingRepositoryError, ReviewRepository, ReviewRepositoryError,
    TourRepository, TourRepositoryError, UserDirectory, UserDirectoryError, VehicleRepository,
    VehicleRepositoryError,
};
use crate::domain::{
    Booking, BookingId, BookingStatus, Review, ReviewId, Tour, TourAggregate, TourFilter, TourId,
    UserId, UserProfile, Vehicle, VehicleFilter, VehicleId,
};

const POISONED: &str = "in-memory store lock poisoned";

/// Row wrapper recording insertion order to break `created_at` ties.
#[derive(Debug, Clone)]
struct Row<T> {
    seq: u64,
    value: T,
}

#[derive(Debug, Default)]
struct Tables {
    next_seq: u64,
    bookings: HashMap<BookingId, Row<Booking>>,
    reviews: HashMap<ReviewId, Row<Review>>,
    tours: HashMap<TourId, Row<Tour>>,
    vehicles: HashMap<VehicleId, Row<Vehicle>>,
    users: HashMap<UserId, UserProfile>,
}

impl Tables {
    fn row<T>(&mut self, value: T) -> Row<T> {
        self.next_seq += 1;
        Row {
            seq: self.next_seq,
            value,
        }
    }
}

/// Newest first by creation time, then by insertion order.
fn newest_first<'a, T: 'a + Clone>(
    rows: impl Iterator<Item = &'a Row<T>>,
    created_at: impl Fn(&T) -> DateTime<Utc>,
) -> Vec<T> {
    let mut rows: Vec<&Row<T>> = rows.collect();
    rows.sort_by_key(|row| Reverse((created_at(&row.value), row.seq)));
    rows.into_iter().map(|row| row.value.clone()).collect()
}

/// Shared in-memory store. Cloning yields another handle to the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    /// Empty store. Seed it with [`Self::put_tour`] and friends.
    ///
    /// ```
    /// use tourbook::outbound::memory::InMemoryStore;
    ///
    /// # use std::sync::Arc;
    /// let store = Arc::new(InMemoryStore::new());
    /// let tours = Arc::clone(&store);
    /// assert!(Arc::ptr_eq(&store, &tours));
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, PoisonError<MutexGuard<'_, Tables>>> {
        self.tables.lock()
    }

    fn lock_for_seed(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add or replace a catalogue tour.
    pub fn put_tour(&self, tour: Tour) {
        let mut tables = self.lock_for_seed();
        let row = tables.row(tour);
        tables.tours.insert(row.value.id, row);
    }

    /// Add or replace a catalogue vehicle.
    pub fn put_vehicle(&self, vehicle: Vehicle) {
        let mut tables = self.lock_for_seed();
        let row = tables.row(vehicle);
        tables.vehicles.insert(row.value.id, row);
    }

    /// Add or replace a user profile.
    pub fn put_user(&self, profile: UserProfile) {
        self.lock_for_seed().users.insert(profile.id, profile);
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn insert(&self, booking: &Booking) -> Result<(), BookingRepositoryError> {
        let mut tables = self
            .lock()
            .map_err(|_| BookingRepositoryError::query(POISONED))?;
        if tables.bookings.contains_key(&booking.id) {
            return Err(BookingRepositoryError::query(format!(
                "booking {} already exists",
                booking.id
            )));
        }
        let row = tables.row(booking.clone());
        tables.bookings.insert(booking.id, row);
        Ok(())
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, BookingRepositoryError> {
        let tables = self
            .lock()
            .map_err(|_| BookingRepositoryError::query(POISONED))?;
        Ok(tables.bookings.get(id).map(|row| row.value.clone()))
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Booking>, BookingRepositoryError> {
        let tables = self
            .lock()
            .map_err(|_| BookingRepositoryError::query(POISONED))?;
        Ok(newest_first(
            tables.bookings.values().filter(|row| row.value.user_id == *owner),
            |b| b.created_at,
        ))
    }

    async fn list_all(&self) -> Result<Vec<Booking>, BookingRepositoryError> {
        let tables = self
            .lock()
            .map_err(|_| BookingRepositoryError::query(POISONED))?;
        Ok(newest_first(tables.bookings.values(), |b| b.created_at))
    }

    async fn update_status(
        &self,
        id: &BookingId,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, BookingRepositoryError> {
        let mut tables = self
            .lock()
            .map_err(|_| BookingRepositoryError::query(POISONED))?;
        Ok(match tables.bookings.get_mut(id) {
            Some(row) => {
                row.value.status = status;
                row.value.updated_at = updated_at;
                true
            }
            None => false,
        })
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn insert(&self, review: &Review) -> Result<(), ReviewRepositoryError> {
        let mut tables = self
            .lock()
            .map_err(|_| ReviewRepositoryError::query(POISONED))?;
        if !tables.tours.contains_key(&review.tour_id) {
            return Err(ReviewRepositoryError::missing_tour(format!(
                "tour {} does not exist",
                review.tour_id
            )));
        }
        let taken = tables.reviews.values().any(|row| {
            row.value.tour_id == review.tour_id && row.value.user_id == review.user_id
        });
        if taken {
            return Err(ReviewRepositoryError::duplicate_review(format!(
                "user {} already reviewed tour {}",
                review.user_id, review.tour_id
            )));
        }
        let row = tables.row(review.clone());
        tables.reviews.insert(review.id, row);
        Ok(())
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewRepositoryError> {
        let tables = self
            .lock()
            .map_err(|_| ReviewRepositoryError::query(POISONED))?;
        Ok(tables.reviews.get(id).map(|row| row.value.clone()))
    }

    async fn find_by_tour_and_user(
        &self,
        tour_id: &TourId,
        user_id: &UserId,
    ) -> Result<Option<Review>, ReviewRepositoryError> {
        let tables = self
            .lock()
            .map_err(|_| ReviewRepositoryError::query(POISONED))?;
        Ok(tables
            .reviews
            .values()
            .find(|row| row.value.tour_id == *tour_id && row.value.user_id == *user_id)
            .map(|row| row.value.clone()))
    }

    async fn list_for_tour(&self, tour_id: &TourId) -> Result<Vec<Review>, ReviewRepositoryError> {
        let tables = self
            .lock()
            .map_err(|_| ReviewRepositoryError::query(POISONED))?;
        Ok(newest_first(
            tables.reviews.values().filter(|row| row.value.tour_id == *tour_id),
            |r| r.created_at,
        ))
    }

    async fn delete(&self, id: &ReviewId) -> Result<bool, ReviewRepositoryError> {
        let mut tables = self
            .lock()
            .map_err(|_| ReviewRepositoryError::query(POISONED))?;
        Ok(tables.reviews.remove(id).is_some())
    }
}

#[async_trait]
impl TourRepository for InMemoryStore {
    async fn find_by_id(&self, id: &TourId) -> Result<Option<Tour>, TourRepositoryError> {
        let tables = self
            .lock()
            .map_err(|_| TourRepositoryError::query(POISONED))?;
        Ok(tables.tours.get(id).map(|row| row.value.clone()))
    }

    async fn find_by_ids(&self, ids: &[TourId]) -> Result<Vec<Tour>, TourRepositoryError> {
        let tables = self
            .lock()
            .map_err(|_| TourRepositoryError::query(POISONED))?;
        Ok(ids
            .iter()
            .filter_map(|id| tables.tours.get(id).map(|row| row.value.clone()))
            .collect())
    }

    async fn list(&self, filter: &TourFilter) -> Result<Vec<Tour>, TourRepositoryError> {
        let tables = self
            .lock()
            .map_err(|_| TourRepositoryError::query(POISONED))?;
        Ok(newest_first(
            tables.tours.values().filter(|row| filter.matches(&row.value)),
            |t| t.created_at,
        ))
    }

    async fn update_aggregate(
        &self,
        id: &TourId,
        aggregate: TourAggregate,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, TourRepositoryError> {
        let mut tables = self
            .lock()
            .map_err(|_| TourRepositoryError::query(POISONED))?;
        Ok(match tables.tours.get_mut(id) {
            Some(row) => {
                row.value.aggregate = aggregate;
                row.value.updated_at = updated_at;
                true
            }
            None => false,
        })
    }
}

#[async_trait]
impl VehicleRepository for InMemoryStore {
    async fn find_by_id(&self, id: &VehicleId) -> Result<Option<Vehicle>, VehicleRepositoryError> {
        let tables = self
            .lock()
            .map_err(|_| VehicleRepositoryError::query(POISONED))?;
        Ok(tables.vehicles.get(id).map(|row| row.value.clone()))
    }

    async fn find_by_ids(
        &self,
        ids: &[VehicleId],
    ) -> Result<Vec<Vehicle>, VehicleRepositoryError> {
        let tables = self
            .lock()
            .map_err(|_| VehicleRepositoryError::query(POISONED))?;
        Ok(ids
            .iter()
            .filter_map(|id| tables.vehicles.get(id).map(|row| row.value.clone()))
            .collect())
    }

    async fn list(&self, filter: &VehicleFilter) -> Result<Vec<Vehicle>, VehicleRepositoryError> {
        let tables = self
            .lock()
            .map_err(|_| VehicleRepositoryError::query(POISONED))?;
        Ok(newest_first(
            tables.vehicles.values().filter(|row| filter.matches(&row.value)),
            |v| v.created_at,
        ))
    }
}

#[async_trait]
impl UserDirectory for InMemoryStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, UserDirectoryError> {
        let tables = self
            .lock()
            .map_err(|_| UserDirectoryError::query(POISONED))?;
        Ok(tables.users.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<UserProfile>, UserDirectoryError> {
        let tables = self
            .lock()
            .map_err(|_| UserDirectoryError::query(POISONED))?;
        Ok(ids
            .iter()
            .filter_map(|id| tables.users.get(id).cloned())
            .collect())
    }
}
