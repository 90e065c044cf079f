//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test;
use serde_json::json;
use std::sync::Arc;

use crate::domain::ports::{FIXTURE_ADMIN_EMAIL, FIXTURE_TRAVELLER_EMAIL, FixtureLoginService};
use crate::domain::test_fixtures::fixture_clock;
use crate::domain::{BookingLedgerService, CatalogueService, ReviewAggregatorService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::InMemoryStore;

/// Build a session middleware configured for tests.
///
/// Uses a fresh key per invocation, names the cookie `session` and drops
/// the `Secure` flag so plain HTTP test requests keep it.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Wire every driving port to services over a shared in-memory store.
pub fn memory_state(store: &Arc<InMemoryStore>) -> HttpState {
    let clock = fixture_clock();
    let ledger = Arc::new(BookingLedgerService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        clock.clone(),
    ));
    let reviews = Arc::new(ReviewAggregatorService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        clock,
    ));
    HttpState::new(HttpStatePorts {
        login: Arc::new(FixtureLoginService),
        bookings: ledger.clone(),
        bookings_query: ledger,
        reviews: reviews.clone(),
        reviews_query: reviews,
        catalogue: Arc::new(CatalogueService::new(store.clone(), store.clone())),
    })
}

/// Fixture account to sign in as.
#[derive(Debug, Clone, Copy)]
pub enum As {
    Traveller,
    Admin,
}

/// Log in through `POST /api/v1/login` and return the session cookie.
pub async fn login_cookie<S>(app: &S, who: As) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let email = match who {
        As::Traveller => FIXTURE_TRAVELLER_EMAIL,
        As::Admin => FIXTURE_ADMIN_EMAIL,
    };
    let request = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "email": email, "password": "password" }))
        .to_request();
    let response = test::call_service(app, request).await;
    assert!(response.status().is_success(), "fixture login succeeds");
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(|cookie| cookie.into_owned())
        .expect("session cookie")
}
