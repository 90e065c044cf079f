//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BookingCommand, BookingQuery, CatalogueQuery, LoginService, ReviewCommand, ReviewQuery,
};

/// Parameter object bundling every port implementation the handlers use.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
    pub reviews: Arc<dyn ReviewCommand>,
    pub reviews_query: Arc<dyn ReviewQuery>,
    pub catalogue: Arc<dyn CatalogueQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
    pub reviews: Arc<dyn ReviewCommand>,
    pub reviews_query: Arc<dyn ReviewQuery>,
    pub catalogue: Arc<dyn CatalogueQuery>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use tourbook::domain::ports::FixtureLoginService;
    /// use tourbook::domain::{
    ///     BookingLedgerService, CatalogueService, ReviewAggregatorService,
    /// };
    /// use tourbook::inbound::http::state::{HttpState, HttpStatePorts};
    /// use tourbook::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let clock: Arc<dyn mockable::Clock> = Arc::new(mockable::DefaultClock);
    /// let ledger = Arc::new(BookingLedgerService::new(
    ///     store.clone(), store.clone(), store.clone(), store.clone(), clock.clone(),
    /// ));
    /// let reviews = Arc::new(ReviewAggregatorService::new(
    ///     store.clone(), store.clone(), store.clone(), clock,
    /// ));
    /// let state = HttpState::new(HttpStatePorts {
    ///     login: Arc::new(FixtureLoginService),
    ///     bookings: ledger.clone(),
    ///     bookings_query: ledger,
    ///     reviews: reviews.clone(),
    ///     reviews_query: reviews,
    ///     catalogue: Arc::new(CatalogueService::new(store.clone(), store)),
    /// });
    /// let _login = state.login.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            bookings,
            bookings_query,
            reviews,
            reviews_query,
            catalogue,
        } = ports;
        Self {
            login,
            bookings,
            bookings_query,
            reviews,
            reviews_query,
            catalogue,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
