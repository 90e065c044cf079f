//! Tests for booking HTTP handlers.

use super::*;
use crate::domain::ports::FIXTURE_TRAVELLER_ID;
use crate::domain::test_fixtures::{tour, vehicle};
use crate::domain::{TourId, VehicleId};
use crate::inbound::http::test_utils::{As, login_cookie, memory_state, test_session_middleware};
use crate::inbound::http::users::login;
use crate::outbound::memory::InMemoryStore;
use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

struct Fixture {
    store: Arc<InMemoryStore>,
    tour_id: TourId,
    vehicle_id: VehicleId,
}

impl Fixture {
    fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let tour_id = TourId::random();
        let vehicle_id = VehicleId::random();
        store.put_tour(tour(tour_id));
        store.put_vehicle(vehicle(vehicle_id));
        Self {
            store,
            tour_id,
            vehicle_id,
        }
    }

    fn app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(memory_state(&self.store)))
            .wrap(test_session_middleware())
            .service(web::scope("/api/v1").service(login).configure(configure))
    }

    fn tour_payload(&self) -> Value {
        json!({
            "bookingType": "tour",
            "tour": self.tour_id.to_string(),
            "startDate": "2026-05-01T07:30:00Z",
            "numberOfPeople": 2,
            "totalPrice": 170.0,
            "customerName": "Kumari Silva",
            "customerEmail": "kumari@example.test",
            "customerPhone": "+94 71 000 0000"
        })
    }
}

async fn create<S>(app: &S, cookie: &Cookie<'static>, payload: Value) -> actix_web::dev::ServiceResponse
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/bookings")
        .cookie(cookie.clone())
        .set_json(payload)
        .to_request();
    actix_test::call_service(app, request).await
}

async fn created_id<S>(app: &S, cookie: &Cookie<'static>, payload: Value) -> String
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let response = create(app, cookie, payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    body["data"]["id"].as_str().expect("booking id").to_owned()
}

#[rstest]
#[actix_web::test]
async fn create_returns_pending_booking_owned_by_caller() {
    let fixture = Fixture::new();
    let app = actix_test::init_service(fixture.app()).await;
    let cookie = login_cookie(&app, As::Traveller).await;

    let response = create(&app, &cookie, fixture.tour_payload()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["status"], "pending");
    assert_eq!(data["user"], FIXTURE_TRAVELLER_ID);
    assert_eq!(data["tour"], fixture.tour_id.to_string());
    assert_eq!(data["vehicle"], Value::Null);
    assert_eq!(data["numberOfPeople"], 2);
}

#[rstest]
#[actix_web::test]
async fn create_requires_a_session() {
    let fixture = Fixture::new();
    let app = actix_test::init_service(fixture.app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(fixture.tour_payload())
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[case::vehicle_on_tour_booking("vehicle", "unexpected_vehicle_reference")]
#[case::vehicle_booking_without_vehicle("type", "missing_vehicle_reference")]
#[actix_web::test]
async fn mismatched_references_are_rejected(#[case] change: &str, #[case] code: &str) {
    let fixture = Fixture::new();
    let app = actix_test::init_service(fixture.app()).await;
    let cookie = login_cookie(&app, As::Traveller).await;
    let mut payload = fixture.tour_payload();
    match change {
        "vehicle" => payload["vehicle"] = json!(fixture.vehicle_id.to_string()),
        _ => payload["bookingType"] = json!("vehicle"),
    }

    let response = create(&app, &cookie, payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], code);
}

#[rstest]
#[actix_web::test]
async fn my_bookings_resolve_the_target_summary() {
    let fixture = Fixture::new();
    let app = actix_test::init_service(fixture.app()).await;
    let cookie = login_cookie(&app, As::Traveller).await;
    created_id(&app, &cookie, fixture.tour_payload()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/bookings/my-bookings")
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(
        response
            .headers()
            .get("Cache-Control")
            .and_then(|value| value.to_str().ok()),
        Some("private, no-cache, must-revalidate")
    );
    let body: Value = actix_test::read_body_json(response).await;

    assert_eq!(body["count"], 1);
    let listing = &body["data"][0];
    assert_eq!(listing["tourDetails"]["name"], "Ella Rock Trek");
    assert_eq!(listing["vehicleDetails"], Value::Null);
    assert!(listing.get("owner").is_none());
}

#[rstest]
#[actix_web::test]
async fn listing_every_booking_is_admin_only() {
    let fixture = Fixture::new();
    let app = actix_test::init_service(fixture.app()).await;
    let traveller = login_cookie(&app, As::Traveller).await;
    let admin = login_cookie(&app, As::Admin).await;
    created_id(&app, &traveller, fixture.tour_payload()).await;

    let denied = actix_test::TestRequest::get()
        .uri("/api/v1/bookings")
        .cookie(traveller)
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, denied).await.status(),
        StatusCode::FORBIDDEN
    );

    let allowed = actix_test::TestRequest::get()
        .uri("/api/v1/bookings")
        .cookie(admin)
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, allowed).await;
    assert_eq!(body["count"], 1);
}

#[rstest]
#[actix_web::test]
async fn owner_can_read_their_booking_detail() {
    let fixture = Fixture::new();
    let app = actix_test::init_service(fixture.app()).await;
    let cookie = login_cookie(&app, As::Traveller).await;
    let id = created_id(&app, &cookie, fixture.tour_payload()).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/bookings/{id}"))
        .cookie(cookie)
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["tourDetails"]["maxGroupSize"], 10);
}

#[rstest]
#[case("not-a-uuid", StatusCode::BAD_REQUEST)]
#[case("7b0c6f4e-52a1-4c0e-9a55-5b0e1cf0a001", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn unknown_or_malformed_ids_fail(#[case] id: &str, #[case] expected: StatusCode) {
    let fixture = Fixture::new();
    let app = actix_test::init_service(fixture.app()).await;
    let cookie = login_cookie(&app, As::Admin).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/bookings/{id}"))
        .cookie(cookie)
        .to_request();

    assert_eq!(
        actix_test::call_service(&app, request).await.status(),
        expected
    );
}

#[rstest]
#[actix_web::test]
async fn admin_sets_any_status() {
    let fixture = Fixture::new();
    let app = actix_test::init_service(fixture.app()).await;
    let traveller = login_cookie(&app, As::Traveller).await;
    let admin = login_cookie(&app, As::Admin).await;
    let id = created_id(&app, &traveller, fixture.tour_payload()).await;

    let denied = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/bookings/{id}"))
        .cookie(traveller)
        .set_json(json!({ "status": "completed" }))
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, denied).await.status(),
        StatusCode::FORBIDDEN
    );

    let allowed = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/bookings/{id}"))
        .cookie(admin)
        .set_json(json!({ "status": "completed" }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, allowed).await;
    assert_eq!(body["data"]["status"], "completed");
}

#[rstest]
#[actix_web::test]
async fn unknown_status_label_is_rejected() {
    let fixture = Fixture::new();
    let app = actix_test::init_service(fixture.app()).await;
    let traveller = login_cookie(&app, As::Traveller).await;
    let admin = login_cookie(&app, As::Admin).await;
    let id = created_id(&app, &traveller, fixture.tour_payload()).await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/bookings/{id}"))
        .cookie(admin)
        .set_json(json!({ "status": "archived" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["field"], "status");
}

#[rstest]
#[actix_web::test]
async fn cancel_is_repeatable_for_the_owner() {
    let fixture = Fixture::new();
    let app = actix_test::init_service(fixture.app()).await;
    let cookie = login_cookie(&app, As::Traveller).await;
    let id = created_id(&app, &cookie, fixture.tour_payload()).await;

    for _ in 0..2 {
        let request = actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/bookings/{id}"))
            .cookie(cookie.clone())
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(
            body,
            json!({ "success": true, "message": "Booking cancelled successfully" })
        );
    }

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/bookings/{id}"))
        .cookie(cookie)
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["data"]["status"], "cancelled");
}
