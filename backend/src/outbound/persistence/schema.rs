//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users. Credentials live with the identity provider.
    users (id) {
        id -> Uuid,
        name -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        /// `user` or `admin`.
        role -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    tours (id) {
        id -> Uuid,
        name -> Text,
        description -> Text,
        price -> Float8,
        /// Length in days.
        duration -> Int4,
        category -> Text,
        max_group_size -> Int4,
        difficulty -> Text,
        locations -> Array<Text>,
        included -> Array<Text>,
        images -> Array<Text>,
        featured -> Bool,
        /// Mean review rating; 4.5 when the tour has no reviews.
        rating -> Float8,
        reviews_count -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    vehicles (id) {
        id -> Uuid,
        name -> Text,
        vehicle_type -> Text,
        description -> Text,
        price_per_day -> Float8,
        capacity -> Int4,
        transmission -> Text,
        fuel_type -> Text,
        features -> Array<Text>,
        images -> Array<Text>,
        available -> Bool,
        rating -> Float8,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Bookings. A check constraint ties `booking_type` to exactly one of
    /// `tour_id` and `vehicle_id`.
    bookings (id) {
        id -> Uuid,
        user_id -> Uuid,
        booking_type -> Text,
        tour_id -> Nullable<Uuid>,
        vehicle_id -> Nullable<Uuid>,
        start_date -> Timestamptz,
        end_date -> Nullable<Timestamptz>,
        number_of_people -> Int4,
        total_price -> Float8,
        status -> Text,
        customer_name -> Text,
        customer_email -> Text,
        customer_phone -> Text,
        special_requests -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tour reviews, unique per `(tour_id, user_id)`.
    reviews (id) {
        id -> Uuid,
        tour_id -> Uuid,
        user_id -> Uuid,
        rating -> Int2,
        comment -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(reviews -> tours (tour_id));

diesel::allow_tables_to_appear_in_same_query!(bookings, reviews, tours, users, vehicles);
