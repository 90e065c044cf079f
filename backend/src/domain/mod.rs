//! Domain types, services, and ports.
//!
//! Purpose: hold the booking and review rules independent of transport and
//! storage. Inbound adapters call the driving ports in [`ports`]; services in
//! this module implement them over the driven repository ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Booking, Review, Tour, Vehicle and their identifiers.
//! - BookingLedgerService, ReviewAggregatorService, CatalogueService.
//! - `recompute`: pure tour aggregate computation.

pub mod auth;
pub mod authorization;
pub mod booking;
pub mod booking_ledger;
pub mod catalogue_service;
pub mod error;
pub mod ids;
pub(crate) mod labels;
pub mod ports;
pub mod review;
pub mod review_aggregator;
mod store_errors;
#[cfg(test)]
pub(crate) mod test_fixtures;
pub mod tour;
pub mod trace_id;
pub mod user;
pub mod vehicle;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::authorization::{AccessDecision, DenyReason, require_admin, require_owner_or_admin};
pub use self::booking::{
    Booking, BookingDetail, BookingDraft, BookingListing, BookingStatus, BookingTarget,
    BookingType, BookingValidationError, CustomerContact, MAX_PARTY_SIZE, NewBooking,
    ResolvedTarget,
};
pub use self::booking_ledger::BookingLedgerService;
pub use self::catalogue_service::CatalogueService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ids::{BookingId, IdParseError, ReviewId, TourId, UserId, VehicleId};
pub use self::labels::UnknownLabel;
pub use self::review::{NewReview, Rating, Review, ReviewValidationError, TourReview};
pub use self::review_aggregator::ReviewAggregatorService;
pub use self::tour::{
    DEFAULT_TOUR_RATING, Difficulty, Tour, TourAggregate, TourCategory, TourFilter, TourSummary,
    recompute,
};
pub use self::trace_id::TraceId;
pub use self::user::{ParseRoleError, Requester, Role, UserProfile};
pub use self::vehicle::{
    FuelType, Transmission, Vehicle, VehicleFilter, VehicleSummary, VehicleType,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use tourbook::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::forbidden("nope"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
