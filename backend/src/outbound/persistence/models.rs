//! Diesel row structs and their conversions to domain records.
//!
//! Rows are internal to the persistence layer. Labels are stored as their
//! wire text and counts as `int4`, so reading a row back can fail when the
//! database holds something the domain rejects; that surfaces as
//! [`RowError`].

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{bookings, reviews, tours, users, vehicles};
use crate::domain::{
    Booking, BookingId, BookingStatus, BookingTarget, BookingType, CustomerContact, Difficulty,
    FuelType, Rating, Review, ReviewId, Role, Tour, TourAggregate, TourCategory, TourId,
    Transmission, UnknownLabel, UserId, UserProfile, Vehicle, VehicleId, VehicleType,
};

/// Stored data the domain cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum RowError {
    #[error(transparent)]
    Label(#[from] UnknownLabel),
    #[error("unknown role `{0}`")]
    Role(String),
    #[error("column `{column}` out of range")]
    OutOfRange { column: &'static str },
    #[error("booking {0} does not reference exactly one tour or vehicle")]
    BookingReference(Uuid),
}

fn to_u32(value: i32, column: &'static str) -> Result<u32, RowError> {
    u32::try_from(value).map_err(|_| RowError::OutOfRange { column })
}

pub(crate) fn to_i32(value: u32, column: &'static str) -> Result<i32, RowError> {
    i32::try_from(value).map_err(|_| RowError::OutOfRange { column })
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
}

impl TryFrom<UserRow> for UserProfile {
    type Error = RowError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(|_| RowError::Role(row.role))?;
        Ok(Self {
            id: UserId::from_uuid(row.id),
            name: row.name,
            email: row.email,
            phone: row.phone,
            role,
        })
    }
}

// ---------------------------------------------------------------------------
// Tours
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tours)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TourRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: i32,
    pub category: String,
    pub max_group_size: i32,
    pub difficulty: String,
    pub locations: Vec<String>,
    pub included: Vec<String>,
    pub images: Vec<String>,
    pub featured: bool,
    pub rating: f64,
    pub reviews_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<TourRow> for Tour {
    type Error = RowError;

    fn try_from(row: TourRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TourId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            duration: to_u32(row.duration, "tours.duration")?,
            category: row.category.parse::<TourCategory>()?,
            max_group_size: to_u32(row.max_group_size, "tours.max_group_size")?,
            difficulty: row.difficulty.parse::<Difficulty>()?,
            locations: row.locations,
            included: row.included,
            images: row.images,
            featured: row.featured,
            aggregate: TourAggregate {
                rating: row.rating,
                reviews_count: to_u32(row.reviews_count, "tours.reviews_count")?,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Vehicles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = vehicles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct VehicleRow {
    pub id: Uuid,
    pub name: String,
    pub vehicle_type: String,
    pub description: String,
    pub price_per_day: f64,
    pub capacity: i32,
    pub transmission: String,
    pub fuel_type: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub available: bool,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<VehicleRow> for Vehicle {
    type Error = RowError;

    fn try_from(row: VehicleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: VehicleId::from_uuid(row.id),
            name: row.name,
            vehicle_type: row.vehicle_type.parse::<VehicleType>()?,
            description: row.description,
            price_per_day: row.price_per_day,
            capacity: to_u32(row.capacity, "vehicles.capacity")?,
            transmission: row.transmission.parse::<Transmission>()?,
            fuel_type: row.fuel_type.parse::<FuelType>()?,
            features: row.features,
            images: row.images,
            available: row.available,
            rating: row.rating,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookingRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub booking_type: String,
    pub tour_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub number_of_people: i32,
    pub total_price: f64,
    pub status: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = RowError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let booking_type = row.booking_type.parse::<BookingType>()?;
        let target = BookingTarget::from_parts(
            booking_type,
            row.tour_id.map(TourId::from_uuid),
            row.vehicle_id.map(VehicleId::from_uuid),
        )
        .ok_or(RowError::BookingReference(row.id))?;

        Ok(Self {
            id: BookingId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            target,
            start_date: row.start_date,
            end_date: row.end_date,
            number_of_people: to_u32(row.number_of_people, "bookings.number_of_people")?,
            total_price: row.total_price,
            status: row.status.parse::<BookingStatus>()?,
            customer: CustomerContact {
                name: row.customer_name,
                email: row.customer_email,
                phone: row.customer_phone,
            },
            special_requests: row.special_requests,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub(crate) struct NewBookingRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub booking_type: &'a str,
    pub tour_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub number_of_people: i32,
    pub total_price: f64,
    pub status: &'a str,
    pub customer_name: &'a str,
    pub customer_email: &'a str,
    pub customer_phone: &'a str,
    pub special_requests: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> NewBookingRow<'a> {
    pub(crate) fn from_booking(booking: &'a Booking) -> Result<Self, RowError> {
        Ok(Self {
            id: *booking.id.as_uuid(),
            user_id: *booking.user_id.as_uuid(),
            booking_type: booking.booking_type().as_str(),
            tour_id: booking.target.tour_id().map(|id| *id.as_uuid()),
            vehicle_id: booking.target.vehicle_id().map(|id| *id.as_uuid()),
            start_date: booking.start_date,
            end_date: booking.end_date,
            number_of_people: to_i32(booking.number_of_people, "bookings.number_of_people")?,
            total_price: booking.total_price,
            status: booking.status.as_str(),
            customer_name: &booking.customer.name,
            customer_email: &booking.customer.email,
            customer_phone: &booking.customer.phone,
            special_requests: booking.special_requests.as_deref(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReviewRow {
    pub id: Uuid,
    pub tour_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ReviewRow> for Review {
    type Error = RowError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        let rating = u8::try_from(row.rating)
            .ok()
            .and_then(|stars| Rating::new(stars).ok())
            .ok_or(RowError::OutOfRange {
                column: "reviews.rating",
            })?;

        Ok(Self {
            id: ReviewId::from_uuid(row.id),
            tour_id: TourId::from_uuid(row.tour_id),
            user_id: UserId::from_uuid(row.user_id),
            rating,
            comment: row.comment,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reviews)]
pub(crate) struct NewReviewRow<'a> {
    pub id: Uuid,
    pub tour_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub comment: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Review> for NewReviewRow<'a> {
    fn from(review: &'a Review) -> Self {
        Self {
            id: *review.id.as_uuid(),
            tour_id: *review.tour_id.as_uuid(),
            user_id: *review.user_id.as_uuid(),
            rating: i16::from(review.rating.value()),
            comment: &review.comment,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}
