//! Translation of repository failures into domain errors.
//!
//! Connection failures become `service_unavailable`; anything else that went
//! wrong inside a store becomes `internal_error`. The raw adapter message is
//! logged here and kept out of the unavailable message, which reaches
//! callers verbatim.

use tracing::{error, warn};

use super::Error;
use super::ports::{
    BookingRepositoryError, ReviewRepositoryError, TourRepositoryError, UserDirectoryError,
    VehicleRepositoryError,
};

fn unavailable(store: &'static str, message: &str) -> Error {
    warn!(store, reason = message, "store unavailable");
    Error::service_unavailable(format!("{store} unavailable"))
}

fn failed(store: &'static str, message: &str) -> Error {
    error!(store, reason = message, "store query failed");
    Error::internal(format!("{store} error: {message}"))
}

pub(crate) fn map_booking_error(err: BookingRepositoryError) -> Error {
    match err {
        BookingRepositoryError::Connection { message } => unavailable("booking store", &message),
        BookingRepositoryError::Query { message } => failed("booking store", &message),
    }
}

/// Map review store failures.
///
/// `DuplicateReview` is handled by the review service before reaching this
/// function; any that slips through is still reported as a conflict.
pub(crate) fn map_review_error(err: ReviewRepositoryError) -> Error {
    match err {
        ReviewRepositoryError::Connection { message } => unavailable("review store", &message),
        ReviewRepositoryError::Query { message } => failed("review store", &message),
        ReviewRepositoryError::DuplicateReview { .. } => duplicate_review(),
        ReviewRepositoryError::MissingTour { .. } => Error::not_found("tour not found"),
    }
}

pub(crate) fn map_tour_error(err: TourRepositoryError) -> Error {
    match err {
        TourRepositoryError::Connection { message } => unavailable("tour store", &message),
        TourRepositoryError::Query { message } => failed("tour store", &message),
    }
}

pub(crate) fn map_vehicle_error(err: VehicleRepositoryError) -> Error {
    match err {
        VehicleRepositoryError::Connection { message } => unavailable("vehicle store", &message),
        VehicleRepositoryError::Query { message } => failed("vehicle store", &message),
    }
}

pub(crate) fn map_user_error(err: UserDirectoryError) -> Error {
    match err {
        UserDirectoryError::Connection { message } => unavailable("user directory", &message),
        UserDirectoryError::Query { message } => failed("user directory", &message),
    }
}

/// Conflict returned for a second review of the same tour by the same user.
pub(crate) fn duplicate_review() -> Error {
    Error::conflict("you have already reviewed this tour")
        .with_details(serde_json::json!({ "code": "duplicate_review" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(map_booking_error(BookingRepositoryError::connection("refused")), ErrorCode::ServiceUnavailable)]
    #[case(map_booking_error(BookingRepositoryError::query("bad sql")), ErrorCode::InternalError)]
    #[case(map_review_error(ReviewRepositoryError::duplicate_review("key")), ErrorCode::Conflict)]
    #[case(map_review_error(ReviewRepositoryError::missing_tour("fk")), ErrorCode::NotFound)]
    #[case(map_tour_error(TourRepositoryError::connection("timeout")), ErrorCode::ServiceUnavailable)]
    #[case(map_vehicle_error(VehicleRepositoryError::query("oops")), ErrorCode::InternalError)]
    #[case(map_user_error(UserDirectoryError::connection("down")), ErrorCode::ServiceUnavailable)]
    fn maps_port_errors_to_codes(#[case] error: Error, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[rstest]
    fn unavailable_message_hides_adapter_detail() {
        let error = map_review_error(ReviewRepositoryError::connection("10.0.0.5:5432 refused"));
        assert!(!error.message().contains("10.0.0.5"));
    }
}
