//! Booking records and the validation that guards their creation.
//!
//! A booking targets exactly one catalogue record: a tour or a vehicle. The
//! wire format carries a `bookingType` label plus two optional reference
//! fields; [`NewBooking::try_from_draft`] collapses them into a
//! [`BookingTarget`] and refuses any combination that does not name exactly
//! the reference matching the declared type.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::labels::define_label_enum;
use super::{
    BookingId, Tour, TourId, TourSummary, UserId, UserProfile, Vehicle, VehicleId, VehicleSummary,
};

define_label_enum! {
    /// Declared kind of booking.
    BookingType, "booking type" {
        Tour => "tour",
        Vehicle => "vehicle",
    }
}

define_label_enum! {
    /// Lifecycle state of a booking.
    ///
    /// Administrators may move a booking between any two states; owners can
    /// only cancel.
    BookingStatus, "booking status" {
        Pending => "pending",
        Confirmed => "confirmed",
        Cancelled => "cancelled",
        Completed => "completed",
    }
}

/// Catalogue record a booking reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingTarget {
    Tour(TourId),
    Vehicle(VehicleId),
}

impl BookingTarget {
    /// Declared type matching this target.
    pub const fn booking_type(&self) -> BookingType {
        match self {
            Self::Tour(_) => BookingType::Tour,
            Self::Vehicle(_) => BookingType::Vehicle,
        }
    }

    pub const fn tour_id(&self) -> Option<TourId> {
        match self {
            Self::Tour(id) => Some(*id),
            Self::Vehicle(_) => None,
        }
    }

    pub const fn vehicle_id(&self) -> Option<VehicleId> {
        match self {
            Self::Tour(_) => None,
            Self::Vehicle(id) => Some(*id),
        }
    }

    /// Rebuild a target from its stored columns.
    ///
    /// Returns `None` when the columns violate the reference invariant.
    pub fn from_parts(
        booking_type: BookingType,
        tour: Option<TourId>,
        vehicle: Option<VehicleId>,
    ) -> Option<Self> {
        match (booking_type, tour, vehicle) {
            (BookingType::Tour, Some(id), None) => Some(Self::Tour(id)),
            (BookingType::Vehicle, None, Some(id)) => Some(Self::Vehicle(id)),
            _ => None,
        }
    }
}

/// Validation failures raised while building a [`NewBooking`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingValidationError {
    #[error("tour booking must reference a tour")]
    MissingTourReference,
    #[error("vehicle booking must reference a vehicle")]
    MissingVehicleReference,
    #[error("tour booking must not reference a vehicle")]
    UnexpectedVehicleReference,
    #[error("vehicle booking must not reference a tour")]
    UnexpectedTourReference,
    #[error("number of people must be between 1 and 2147483647")]
    InvalidNumberOfPeople,
    #[error("total price must be a non-negative number")]
    InvalidTotalPrice,
    #[error("customer name must not be empty")]
    EmptyCustomerName,
    #[error("customer email must not be empty")]
    EmptyCustomerEmail,
    #[error("customer phone must not be empty")]
    EmptyCustomerPhone,
}

impl BookingValidationError {
    /// Machine code placed in error details.
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingTourReference => "missing_tour_reference",
            Self::MissingVehicleReference => "missing_vehicle_reference",
            Self::UnexpectedVehicleReference => "unexpected_vehicle_reference",
            Self::UnexpectedTourReference => "unexpected_tour_reference",
            Self::InvalidNumberOfPeople => "invalid_number_of_people",
            Self::InvalidTotalPrice => "invalid_total_price",
            Self::EmptyCustomerName => "empty_customer_name",
            Self::EmptyCustomerEmail => "empty_customer_email",
            Self::EmptyCustomerPhone => "empty_customer_phone",
        }
    }

    /// Payload field the failure refers to.
    pub const fn field(self) -> &'static str {
        match self {
            Self::MissingTourReference | Self::UnexpectedTourReference => "tour",
            Self::MissingVehicleReference | Self::UnexpectedVehicleReference => "vehicle",
            Self::InvalidNumberOfPeople => "numberOfPeople",
            Self::InvalidTotalPrice => "totalPrice",
            Self::EmptyCustomerName => "customerName",
            Self::EmptyCustomerEmail => "customerEmail",
            Self::EmptyCustomerPhone => "customerPhone",
        }
    }
}

/// Denormalised contact details captured at booking time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Unvalidated booking request as parsed from the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub booking_type: BookingType,
    pub tour: Option<TourId>,
    pub vehicle: Option<VehicleId>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    /// Defaults to one traveller when absent.
    pub number_of_people: Option<u32>,
    pub total_price: f64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub special_requests: Option<String>,
}

/// Largest party a single booking may carry; matches the `INTEGER` column.
pub const MAX_PARTY_SIZE: u32 = i32::MAX.unsigned_abs();

/// Booking request that satisfies every creation invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub target: BookingTarget,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub number_of_people: u32,
    pub total_price: f64,
    pub customer: CustomerContact,
    pub special_requests: Option<String>,
}

fn required(value: &str, err: BookingValidationError) -> Result<String, BookingValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed.to_owned())
    }
}

impl NewBooking {
    /// Validate a draft. The reference invariant is checked first.
    pub fn try_from_draft(draft: BookingDraft) -> Result<Self, BookingValidationError> {
        let target = match (draft.booking_type, draft.tour, draft.vehicle) {
            (BookingType::Tour, None, _) => {
                return Err(BookingValidationError::MissingTourReference);
            }
            (BookingType::Tour, Some(_), Some(_)) => {
                return Err(BookingValidationError::UnexpectedVehicleReference);
            }
            (BookingType::Tour, Some(id), None) => BookingTarget::Tour(id),
            (BookingType::Vehicle, _, None) => {
                return Err(BookingValidationError::MissingVehicleReference);
            }
            (BookingType::Vehicle, Some(_), Some(_)) => {
                return Err(BookingValidationError::UnexpectedTourReference);
            }
            (BookingType::Vehicle, None, Some(id)) => BookingTarget::Vehicle(id),
        };

        let number_of_people = draft.number_of_people.unwrap_or(1);
        if !(1..=MAX_PARTY_SIZE).contains(&number_of_people) {
            return Err(BookingValidationError::InvalidNumberOfPeople);
        }
        if !draft.total_price.is_finite() || draft.total_price < 0.0 {
            return Err(BookingValidationError::InvalidTotalPrice);
        }

        let customer = CustomerContact {
            name: required(&draft.customer_name, BookingValidationError::EmptyCustomerName)?,
            email: required(&draft.customer_email, BookingValidationError::EmptyCustomerEmail)?,
            phone: required(&draft.customer_phone, BookingValidationError::EmptyCustomerPhone)?,
        };
        let special_requests = draft
            .special_requests
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty());

        Ok(Self {
            target,
            start_date: draft.start_date,
            end_date: draft.end_date,
            number_of_people,
            total_price: draft.total_price,
            customer,
            special_requests,
        })
    }

    /// Materialise the stored record: pending, owned by `owner`.
    pub fn into_booking(self, id: BookingId, owner: UserId, now: DateTime<Utc>) -> Booking {
        Booking {
            id,
            user_id: owner,
            target: self.target,
            start_date: self.start_date,
            end_date: self.end_date,
            number_of_people: self.number_of_people,
            total_price: self.total_price,
            status: BookingStatus::Pending,
            customer: self.customer,
            special_requests: self.special_requests,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Stored booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub target: BookingTarget,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub number_of_people: u32,
    pub total_price: f64,
    pub status: BookingStatus,
    pub customer: CustomerContact,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub const fn booking_type(&self) -> BookingType {
        self.target.booking_type()
    }

    /// Move to `status` and bump `updated_at`.
    pub fn set_status(&mut self, status: BookingStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}

/// Catalogue record a booking points at, resolved for display.
///
/// The inner value is `None` when the referenced record no longer exists.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedTarget<T, V> {
    Tour(Option<T>),
    Vehicle(Option<V>),
}

/// Booking as shown in list views.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingListing {
    pub booking: Booking,
    pub target: ResolvedTarget<TourSummary, VehicleSummary>,
    /// Populated only for administrator listings.
    pub owner: Option<UserProfile>,
}

/// Booking with every reference fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetail {
    pub booking: Booking,
    pub target: ResolvedTarget<Tour, Vehicle>,
    pub owner: Option<UserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn draft() -> BookingDraft {
        BookingDraft {
            booking_type: BookingType::Tour,
            tour: Some(TourId::random()),
            vehicle: None,
            start_date: Utc::now(),
            end_date: None,
            number_of_people: None,
            total_price: 240.0,
            customer_name: " Nimal Perera ".into(),
            customer_email: "nimal@example.test".into(),
            customer_phone: "+94 77 123 4567".into(),
            special_requests: Some("   ".into()),
        }
    }

    #[rstest]
    fn tour_draft_yields_tour_target(draft: BookingDraft) {
        let tour = draft.tour;
        let booking = NewBooking::try_from_draft(draft).expect("valid draft");
        assert_eq!(booking.target.tour_id(), tour);
        assert_eq!(booking.target.vehicle_id(), None);
        assert_eq!(booking.number_of_people, 1);
        assert_eq!(booking.customer.name, "Nimal Perera");
        assert_eq!(booking.special_requests, None);
    }

    #[rstest]
    fn vehicle_draft_yields_vehicle_target(mut draft: BookingDraft) {
        let vehicle = VehicleId::random();
        draft.booking_type = BookingType::Vehicle;
        draft.tour = None;
        draft.vehicle = Some(vehicle);
        let booking = NewBooking::try_from_draft(draft).expect("valid draft");
        assert_eq!(booking.target, BookingTarget::Vehicle(vehicle));
        assert_eq!(booking.target.booking_type(), BookingType::Vehicle);
    }

    #[rstest]
    #[case(BookingType::Tour, false, false, BookingValidationError::MissingTourReference)]
    #[case(BookingType::Tour, false, true, BookingValidationError::MissingTourReference)]
    #[case(BookingType::Tour, true, true, BookingValidationError::UnexpectedVehicleReference)]
    #[case(BookingType::Vehicle, false, false, BookingValidationError::MissingVehicleReference)]
    #[case(BookingType::Vehicle, true, false, BookingValidationError::MissingVehicleReference)]
    #[case(BookingType::Vehicle, true, true, BookingValidationError::UnexpectedTourReference)]
    fn reference_invariant_is_enforced(
        mut draft: BookingDraft,
        #[case] booking_type: BookingType,
        #[case] with_tour: bool,
        #[case] with_vehicle: bool,
        #[case] expected: BookingValidationError,
    ) {
        draft.booking_type = booking_type;
        draft.tour = with_tour.then(TourId::random);
        draft.vehicle = with_vehicle.then(VehicleId::random);
        assert_eq!(NewBooking::try_from_draft(draft), Err(expected));
    }

    #[rstest]
    fn reference_is_checked_before_fields(mut draft: BookingDraft) {
        draft.tour = None;
        draft.customer_name = String::new();
        draft.total_price = -1.0;
        assert_eq!(
            NewBooking::try_from_draft(draft),
            Err(BookingValidationError::MissingTourReference)
        );
    }

    #[rstest]
    #[case(Some(0), 10.0, BookingValidationError::InvalidNumberOfPeople)]
    #[case(Some(3_000_000_000), 10.0, BookingValidationError::InvalidNumberOfPeople)]
    #[case(Some(2), -0.5, BookingValidationError::InvalidTotalPrice)]
    #[case(Some(2), f64::NAN, BookingValidationError::InvalidTotalPrice)]
    fn numeric_constraints(
        mut draft: BookingDraft,
        #[case] people: Option<u32>,
        #[case] price: f64,
        #[case] expected: BookingValidationError,
    ) {
        draft.number_of_people = people;
        draft.total_price = price;
        assert_eq!(NewBooking::try_from_draft(draft), Err(expected));
    }

    #[rstest]
    fn blank_contact_fields_are_rejected(mut draft: BookingDraft) {
        draft.customer_phone = "  ".into();
        let err = NewBooking::try_from_draft(draft).expect_err("blank phone");
        assert_eq!(err.field(), "customerPhone");
    }

    #[rstest]
    fn stored_booking_starts_pending(draft: BookingDraft) {
        let owner = UserId::random();
        let now = Utc::now();
        let booking = NewBooking::try_from_draft(draft)
            .expect("valid draft")
            .into_booking(BookingId::random(), owner, now);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.user_id, owner);
        assert_eq!(booking.created_at, booking.updated_at);
    }

    #[rstest]
    #[case(BookingType::Tour, true, false, true)]
    #[case(BookingType::Tour, false, true, false)]
    #[case(BookingType::Vehicle, false, true, true)]
    #[case(BookingType::Vehicle, true, true, false)]
    fn from_parts_mirrors_invariant(
        #[case] booking_type: BookingType,
        #[case] with_tour: bool,
        #[case] with_vehicle: bool,
        #[case] valid: bool,
    ) {
        let target = BookingTarget::from_parts(
            booking_type,
            with_tour.then(TourId::random),
            with_vehicle.then(VehicleId::random),
        );
        assert_eq!(target.is_some(), valid);
    }
}
