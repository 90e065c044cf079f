//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (session, bookings,
//!   reviews, catalogue, health)
//! - **Schemas**: request/response DTOs plus wrappers for domain types
//!   ([`ErrorSchema`], [`TourSchema`], ...) so the domain stays free of utoipa
//! - **Security**: session cookie authentication scheme
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::bookings::{
    BookingDetailResponse, BookingListingResponse, BookingRequest, BookingResponse,
    BookingStatusRequest,
};
use crate::inbound::http::envelope::MessageEnvelope;
use crate::inbound::http::reviews::ReviewRequest;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, ReviewSchema, TourReviewSchema, TourSchema, UserProfileSchema,
    VehicleSchema,
};
use crate::inbound::http::users::{CurrentUserResponse, LoginRequest};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Tourbook API",
        description = "Tour and vehicle bookings, tour reviews, and the public catalogue.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_user,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::list_my_bookings,
        crate::inbound::http::bookings::list_all_bookings,
        crate::inbound::http::bookings::get_booking,
        crate::inbound::http::bookings::update_booking_status,
        crate::inbound::http::bookings::cancel_booking,
        crate::inbound::http::reviews::create_review,
        crate::inbound::http::reviews::list_tour_reviews,
        crate::inbound::http::reviews::delete_review,
        crate::inbound::http::catalogue::list_tours,
        crate::inbound::http::catalogue::get_tour,
        crate::inbound::http::catalogue::list_vehicles,
        crate::inbound::http::catalogue::get_vehicle,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserProfileSchema,
        TourSchema,
        VehicleSchema,
        ReviewSchema,
        TourReviewSchema,
        LoginRequest,
        CurrentUserResponse,
        BookingRequest,
        BookingStatusRequest,
        BookingResponse,
        BookingListingResponse,
        BookingDetailResponse,
        ReviewRequest,
        MessageEnvelope,
    )),
    tags(
        (name = "users", description = "Session login and the current identity"),
        (name = "bookings", description = "Tour and vehicle bookings"),
        (name = "reviews", description = "Tour reviews and rating aggregates"),
        (name = "catalogue", description = "Public tour and vehicle listings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
