//! Builders wiring the driving ports to a storage backend.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use tourbook::domain::ports::{
    BookingRepository, FixtureLoginService, ReviewRepository, TourRepository, UserDirectory,
    VehicleRepository,
};
use tourbook::domain::{BookingLedgerService, CatalogueService, ReviewAggregatorService};
use tourbook::inbound::http::state::{HttpState, HttpStatePorts};
use tourbook::outbound::memory::InMemoryStore;
use tourbook::outbound::persistence::{
    DbPool, DieselBookingRepository, DieselReviewRepository, DieselTourRepository,
    DieselUserDirectory, DieselVehicleRepository,
};

use super::ServerConfig;

/// One adapter per repository port.
struct Stores<B, R, T, V, U> {
    bookings: Arc<B>,
    reviews: Arc<R>,
    tours: Arc<T>,
    vehicles: Arc<V>,
    users: Arc<U>,
}

impl Stores<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore> {
    fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            bookings: store.clone(),
            reviews: store.clone(),
            tours: store.clone(),
            vehicles: store.clone(),
            users: store,
        }
    }
}

impl
    Stores<
        DieselBookingRepository,
        DieselReviewRepository,
        DieselTourRepository,
        DieselVehicleRepository,
        DieselUserDirectory,
    >
{
    fn postgres(pool: &DbPool) -> Self {
        Self {
            bookings: Arc::new(DieselBookingRepository::new(pool.clone())),
            reviews: Arc::new(DieselReviewRepository::new(pool.clone())),
            tours: Arc::new(DieselTourRepository::new(pool.clone())),
            vehicles: Arc::new(DieselVehicleRepository::new(pool.clone())),
            users: Arc::new(DieselUserDirectory::new(pool.clone())),
        }
    }
}

impl<B, R, T, V, U> Stores<B, R, T, V, U>
where
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
    V: VehicleRepository + 'static,
    U: UserDirectory + 'static,
{
    fn into_ports(self, clock: Arc<dyn Clock>) -> HttpStatePorts {
        let Self {
            bookings,
            reviews,
            tours,
            vehicles,
            users,
        } = self;
        let ledger = Arc::new(BookingLedgerService::new(
            bookings,
            tours.clone(),
            vehicles.clone(),
            users.clone(),
            clock.clone(),
        ));
        let aggregator = Arc::new(ReviewAggregatorService::new(
            reviews,
            tours.clone(),
            users,
            clock,
        ));
        HttpStatePorts {
            login: Arc::new(FixtureLoginService),
            bookings: ledger.clone(),
            bookings_query: ledger,
            reviews: aggregator.clone(),
            reviews_query: aggregator,
            catalogue: Arc::new(CatalogueService::new(tours, vehicles)),
        }
    }
}

/// Build the HTTP state: PostgreSQL when a pool is configured, otherwise an
/// empty in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let ports = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL repositories");
            Stores::postgres(pool).into_ports(clock)
        }
        None => {
            info!("no database configured; using in-memory repositories");
            Stores::in_memory().into_ports(clock)
        }
    };
    web::Data::new(HttpState::new(ports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::{Key, SameSite};
    use rstest::rstest;
    use tourbook::domain::TourFilter;

    #[rstest]
    #[tokio::test]
    async fn memory_backend_starts_empty() {
        let config = ServerConfig {
            key: Key::generate(),
            cookie_secure: false,
            same_site: SameSite::Lax,
            bind_addr: "127.0.0.1:0".parse().expect("literal address"),
            db_pool: None,
        };

        let state = build_http_state(&config);

        let tours = state
            .catalogue
            .list_tours(&TourFilter::default())
            .await
            .expect("in-memory listing");
        assert!(tours.is_empty());
    }
}
