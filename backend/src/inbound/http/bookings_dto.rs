//! Booking DTOs and parsing helpers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Booking, BookingDetail, BookingDraft, BookingId, BookingListing, BookingStatus, BookingType,
    Error, ResolvedTarget, Tour, TourId, TourSummary, UserProfile, Vehicle, VehicleId,
    VehicleSummary,
};
use crate::inbound::http::schemas::{TourSchema, UserProfileSchema, VehicleSchema};
use crate::inbound::http::validation::{
    FieldName, parse_id, parse_label, parse_optional_id, parse_optional_rfc3339_timestamp,
    parse_rfc3339_timestamp, require,
};

#[derive(Debug, Deserialize)]
pub(super) struct BookingPath {
    pub(super) id: String,
}

/// Request payload for `POST /api/v1/bookings`.
///
/// A tour booking names `tour` and omits `vehicle`; a vehicle booking does
/// the reverse.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[schema(example = "tour")]
    pub booking_type: Option<String>,
    #[schema(format = "uuid")]
    pub tour: Option<String>,
    #[schema(format = "uuid")]
    pub vehicle: Option<String>,
    #[schema(format = "date-time")]
    pub start_date: Option<String>,
    #[schema(format = "date-time")]
    pub end_date: Option<String>,
    /// Defaults to 1.
    pub number_of_people: Option<u32>,
    pub total_price: Option<f64>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub special_requests: Option<String>,
}

impl BookingRequest {
    /// Parse wire fields into a draft. Content rules are left to the domain.
    pub(super) fn into_draft(self) -> Result<BookingDraft, Error> {
        let booking_type: BookingType = parse_label(
            &require(self.booking_type, FieldName::new("bookingType"))?,
            FieldName::new("bookingType"),
        )?;
        let tour: Option<TourId> = parse_optional_id(self.tour.as_deref(), FieldName::new("tour"))?;
        let vehicle: Option<VehicleId> =
            parse_optional_id(self.vehicle.as_deref(), FieldName::new("vehicle"))?;
        let start_date = parse_rfc3339_timestamp(
            &require(self.start_date, FieldName::new("startDate"))?,
            FieldName::new("startDate"),
        )?;
        let end_date =
            parse_optional_rfc3339_timestamp(self.end_date.as_deref(), FieldName::new("endDate"))?;
        let total_price = require(self.total_price, FieldName::new("totalPrice"))?;

        Ok(BookingDraft {
            booking_type,
            tour,
            vehicle,
            start_date,
            end_date,
            number_of_people: self.number_of_people,
            total_price,
            customer_name: self.customer_name.unwrap_or_default(),
            customer_email: self.customer_email.unwrap_or_default(),
            customer_phone: self.customer_phone.unwrap_or_default(),
            special_requests: self.special_requests,
        })
    }
}

/// Request payload for `PUT /api/v1/bookings/{id}`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusRequest {
    #[schema(example = "confirmed")]
    pub status: Option<String>,
}

impl BookingStatusRequest {
    pub(super) fn into_status(self) -> Result<BookingStatus, Error> {
        let raw = require(self.status, FieldName::new("status"))?;
        parse_label(&raw, FieldName::new("status"))
    }
}

pub(super) fn parse_booking_id(raw: &str) -> Result<BookingId, Error> {
    parse_id(raw, FieldName::new("id"))
}

/// Stored booking as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    #[schema(format = "uuid")]
    pub id: String,
    /// Owning user.
    #[schema(format = "uuid")]
    pub user: String,
    #[schema(example = "tour")]
    pub booking_type: String,
    #[schema(format = "uuid")]
    pub tour: Option<String>,
    #[schema(format = "uuid")]
    pub vehicle: Option<String>,
    #[schema(format = "date-time")]
    pub start_date: String,
    #[schema(format = "date-time")]
    pub end_date: Option<String>,
    pub number_of_people: u32,
    pub total_price: f64,
    #[schema(example = "pending")]
    pub status: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub special_requests: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        Self {
            id: value.id.to_string(),
            user: value.user_id.to_string(),
            booking_type: value.booking_type().to_string(),
            tour: value.target.tour_id().map(|id| id.to_string()),
            vehicle: value.target.vehicle_id().map(|id| id.to_string()),
            start_date: value.start_date.to_rfc3339(),
            end_date: value.end_date.map(|date| date.to_rfc3339()),
            number_of_people: value.number_of_people,
            total_price: value.total_price,
            status: value.status.to_string(),
            customer_name: value.customer.name,
            customer_email: value.customer.email,
            customer_phone: value.customer.phone,
            special_requests: value.special_requests,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

fn split<T, V>(target: ResolvedTarget<T, V>) -> (Option<T>, Option<V>) {
    match target {
        ResolvedTarget::Tour(tour) => (tour, None),
        ResolvedTarget::Vehicle(vehicle) => (None, vehicle),
    }
}

/// Booking with summaries of its target, used by list endpoints.
///
/// `tourDetails`/`vehicleDetails` are null when the target was removed from
/// the catalogue. `owner` is only filled for administrator listings.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingListingResponse {
    #[serde(flatten)]
    pub booking: BookingResponse,
    #[schema(value_type = Option<Object>)]
    pub tour_details: Option<TourSummary>,
    #[schema(value_type = Option<Object>)]
    pub vehicle_details: Option<VehicleSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<UserProfileSchema>)]
    pub owner: Option<UserProfile>,
}

impl From<BookingListing> for BookingListingResponse {
    fn from(value: BookingListing) -> Self {
        let (tour_details, vehicle_details) = split(value.target);
        Self {
            booking: value.booking.into(),
            tour_details,
            vehicle_details,
            owner: value.owner,
        }
    }
}

/// Booking with its target and owner fully resolved.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetailResponse {
    #[serde(flatten)]
    pub booking: BookingResponse,
    #[schema(value_type = Option<TourSchema>)]
    pub tour_details: Option<Tour>,
    #[schema(value_type = Option<VehicleSchema>)]
    pub vehicle_details: Option<Vehicle>,
    #[schema(value_type = Option<UserProfileSchema>)]
    pub owner: Option<UserProfile>,
}

impl From<BookingDetail> for BookingDetailResponse {
    fn from(value: BookingDetail) -> Self {
        let (tour_details, vehicle_details) = split(value.target);
        Self {
            booking: value.booking.into(),
            tour_details,
            vehicle_details,
            owner: value.owner,
        }
    }
}
