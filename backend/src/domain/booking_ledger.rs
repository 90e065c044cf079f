//! Booking ledger service.
//!
//! Implements the booking driving ports on top of the booking, catalogue and
//! user directory repositories. Creation validates the tour-or-vehicle
//! reference before anything is written; every mutation after creation goes
//! through the ownership predicates in [`super::authorization`].

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use super::authorization::{require_admin, require_owner_or_admin};
use super::ports::{
    BookingCommand, BookingQuery, BookingRepository, TourRepository, UserDirectory,
    VehicleRepository,
};
use super::store_errors::{map_booking_error, map_tour_error, map_user_error, map_vehicle_error};
use super::{
    Booking, BookingDetail, BookingDraft, BookingId, BookingListing, BookingStatus, BookingTarget,
    BookingValidationError, Error, NewBooking, Requester, ResolvedTarget, TourId, TourSummary,
    UserId, UserProfile, VehicleId, VehicleSummary,
};

/// Booking service implementing [`BookingCommand`] and [`BookingQuery`].
#[derive(Clone)]
pub struct BookingLedgerService<B, T, V, U> {
    bookings: Arc<B>,
    tours: Arc<T>,
    vehicles: Arc<V>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<B, T, V, U> BookingLedgerService<B, T, V, U> {
    /// Create a ledger over booking, catalogue and user stores.
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use tourbook::domain::ports::BookingQuery;
    /// use tourbook::domain::{BookingLedgerService, Requester, UserId};
    /// use tourbook::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let ledger = BookingLedgerService::new(
    ///     store.clone(),
    ///     store.clone(),
    ///     store.clone(),
    ///     store,
    ///     Arc::new(DefaultClock),
    /// );
    /// let runtime = tokio::runtime::Runtime::new()?;
    /// let mine = runtime.block_on(ledger.list_mine(&Requester::user(UserId::random())))?;
    /// assert!(mine.is_empty());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(
        bookings: Arc<B>,
        tours: Arc<T>,
        vehicles: Arc<V>,
        users: Arc<U>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            bookings,
            tours,
            vehicles,
            users,
            clock,
        }
    }
}

fn validation_error(err: BookingValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": err.code(),
    }))
}

fn booking_not_found(id: &BookingId) -> Error {
    Error::not_found("booking not found").with_details(json!({ "bookingId": id }))
}

impl<B, T, V, U> BookingLedgerService<B, T, V, U>
where
    B: BookingRepository,
    T: TourRepository,
    V: VehicleRepository,
    U: UserDirectory,
{
    async fn load(&self, id: &BookingId) -> Result<Booking, Error> {
        self.bookings
            .find_by_id(id)
            .await
            .map_err(map_booking_error)?
            .ok_or_else(|| booking_not_found(id))
    }

    async fn tour_summaries(
        &self,
        bookings: &[Booking],
    ) -> Result<HashMap<TourId, TourSummary>, Error> {
        let ids: BTreeSet<TourId> = bookings.iter().filter_map(|b| b.target.tour_id()).collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let ids: Vec<TourId> = ids.into_iter().collect();
        let tours = self.tours.find_by_ids(&ids).await.map_err(map_tour_error)?;
        Ok(tours.iter().map(|t| (t.id, t.summary())).collect())
    }

    async fn vehicle_summaries(
        &self,
        bookings: &[Booking],
    ) -> Result<HashMap<VehicleId, VehicleSummary>, Error> {
        let ids: BTreeSet<VehicleId> = bookings
            .iter()
            .filter_map(|b| b.target.vehicle_id())
            .collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let ids: Vec<VehicleId> = ids.into_iter().collect();
        let vehicles = self
            .vehicles
            .find_by_ids(&ids)
            .await
            .map_err(map_vehicle_error)?;
        Ok(vehicles.iter().map(|v| (v.id, v.summary())).collect())
    }

    async fn owners(&self, bookings: &[Booking]) -> Result<HashMap<UserId, UserProfile>, Error> {
        let ids: BTreeSet<UserId> = bookings.iter().map(|b| b.user_id).collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let ids: Vec<UserId> = ids.into_iter().collect();
        let users = self.users.find_by_ids(&ids).await.map_err(map_user_error)?;
        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }

    async fn listings(
        &self,
        bookings: Vec<Booking>,
        with_owner: bool,
    ) -> Result<Vec<BookingListing>, Error> {
        let tours = self.tour_summaries(&bookings).await?;
        let vehicles = self.vehicle_summaries(&bookings).await?;
        let owners = if with_owner {
            self.owners(&bookings).await?
        } else {
            HashMap::new()
        };

        Ok(bookings
            .into_iter()
            .map(|booking| {
                let target = match booking.target {
                    BookingTarget::Tour(id) => ResolvedTarget::Tour(tours.get(&id).cloned()),
                    BookingTarget::Vehicle(id) => {
                        ResolvedTarget::Vehicle(vehicles.get(&id).cloned())
                    }
                };
                let owner = if with_owner {
                    owners.get(&booking.user_id).cloned()
                } else {
                    None
                };
                BookingListing {
                    booking,
                    target,
                    owner,
                }
            })
            .collect())
    }
}

#[async_trait]
impl<B, T, V, U> BookingCommand for BookingLedgerService<B, T, V, U>
where
    B: BookingRepository,
    T: TourRepository,
    V: VehicleRepository,
    U: UserDirectory,
{
    async fn create(&self, requester: &Requester, draft: BookingDraft) -> Result<Booking, Error> {
        let new_booking = NewBooking::try_from_draft(draft).map_err(validation_error)?;
        let booking = new_booking.into_booking(
            BookingId::random(),
            requester.user_id(),
            self.clock.utc(),
        );
        self.bookings
            .insert(&booking)
            .await
            .map_err(map_booking_error)?;
        info!(
            booking_id = %booking.id,
            owner = %booking.user_id,
            booking_type = %booking.booking_type(),
            "booking created"
        );
        Ok(booking)
    }

    async fn update_status(
        &self,
        requester: &Requester,
        id: &BookingId,
        status: BookingStatus,
    ) -> Result<Booking, Error> {
        require_admin(requester).into_result()?;
        let mut booking = self.load(id).await?;
        let previous = booking.status;
        booking.set_status(status, self.clock.utc());
        let updated = self
            .bookings
            .update_status(id, booking.status, booking.updated_at)
            .await
            .map_err(map_booking_error)?;
        if !updated {
            return Err(booking_not_found(id));
        }
        info!(booking_id = %id, from = %previous, to = %status, "booking status updated");
        Ok(booking)
    }

    async fn cancel(&self, requester: &Requester, id: &BookingId) -> Result<Booking, Error> {
        let mut booking = self.load(id).await?;
        require_owner_or_admin(requester, &booking.user_id).into_result()?;
        if booking.status == BookingStatus::Cancelled {
            debug!(booking_id = %id, "booking already cancelled");
            return Ok(booking);
        }
        booking.set_status(BookingStatus::Cancelled, self.clock.utc());
        let updated = self
            .bookings
            .update_status(id, booking.status, booking.updated_at)
            .await
            .map_err(map_booking_error)?;
        if !updated {
            return Err(booking_not_found(id));
        }
        info!(booking_id = %id, by = %requester.user_id(), "booking cancelled");
        Ok(booking)
    }
}

#[async_trait]
impl<B, T, V, U> BookingQuery for BookingLedgerService<B, T, V, U>
where
    B: BookingRepository,
    T: TourRepository,
    V: VehicleRepository,
    U: UserDirectory,
{
    async fn list_mine(&self, requester: &Requester) -> Result<Vec<BookingListing>, Error> {
        let bookings = self
            .bookings
            .list_by_owner(&requester.user_id())
            .await
            .map_err(map_booking_error)?;
        self.listings(bookings, false).await
    }

    async fn list_all(&self, requester: &Requester) -> Result<Vec<BookingListing>, Error> {
        require_admin(requester).into_result()?;
        let bookings = self.bookings.list_all().await.map_err(map_booking_error)?;
        self.listings(bookings, true).await
    }

    async fn get(&self, requester: &Requester, id: &BookingId) -> Result<BookingDetail, Error> {
        let booking = self.load(id).await?;
        require_owner_or_admin(requester, &booking.user_id).into_result()?;

        let target = match booking.target {
            BookingTarget::Tour(tour_id) => ResolvedTarget::Tour(
                self.tours
                    .find_by_id(&tour_id)
                    .await
                    .map_err(map_tour_error)?,
            ),
            BookingTarget::Vehicle(vehicle_id) => ResolvedTarget::Vehicle(
                self.vehicles
                    .find_by_id(&vehicle_id)
                    .await
                    .map_err(map_vehicle_error)?,
            ),
        };
        let owner = self
            .users
            .find_by_id(&booking.user_id)
            .await
            .map_err(map_user_error)?;

        Ok(BookingDetail {
            booking,
            target,
            owner,
        })
    }
}

#[cfg(test)]
#[path = "booking_ledger_tests.rs"]
mod tests;
