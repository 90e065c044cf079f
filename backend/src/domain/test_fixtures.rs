//! Shared builders for domain service tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use super::{
    Booking, BookingId, BookingStatus, BookingTarget, CustomerContact, Difficulty, FuelType,
    Rating, Review, ReviewId, Tour, TourAggregate, TourCategory, TourId, Transmission, UserId,
    Vehicle, VehicleId, VehicleType,
};

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

pub(crate) fn tour(id: TourId) -> Tour {
    Tour {
        id,
        name: "Ella Rock Trek".into(),
        description: "Tea country ridge walk".into(),
        price: 85.0,
        duration: 1,
        category: TourCategory::HillCountry,
        max_group_size: 10,
        difficulty: Difficulty::Challenging,
        locations: vec!["Ella".into()],
        included: vec!["Lunch".into()],
        images: Vec::new(),
        featured: false,
        aggregate: TourAggregate::default(),
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}

pub(crate) fn vehicle(id: VehicleId) -> Vehicle {
    Vehicle {
        id,
        name: "Prado".into(),
        vehicle_type: VehicleType::Suv,
        description: "Four-wheel drive".into(),
        price_per_day: 110.0,
        capacity: 7,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        features: Vec::new(),
        images: Vec::new(),
        available: true,
        rating: 4.5,
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}

pub(crate) fn booking(owner: UserId, target: BookingTarget, status: BookingStatus) -> Booking {
    Booking {
        id: BookingId::random(),
        user_id: owner,
        target,
        start_date: fixture_timestamp(),
        end_date: None,
        number_of_people: 2,
        total_price: 170.0,
        status,
        customer: CustomerContact {
            name: "Kumari Silva".into(),
            email: "kumari@example.test".into(),
            phone: "+94 71 000 0000".into(),
        },
        special_requests: None,
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}

pub(crate) fn review(tour_id: TourId, user_id: UserId, stars: u8) -> Review {
    Review {
        id: ReviewId::random(),
        tour_id,
        user_id,
        rating: Rating::new(stars).expect("fixture rating in range"),
        comment: "Lovely day out".into(),
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}
