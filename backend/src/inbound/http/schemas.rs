//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and register under the domain
//! type's path so generated documents name the real type.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No session is attached to the request.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request clashes with existing state, such as a repeat review.
    #[schema(rename = "conflict")]
    Conflict,
    /// The backing store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "missing required field: customerName")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Structured details such as `{ "field": ..., "code": ... }`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::UserProfile`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserProfile)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserProfileSchema {
    #[schema(example = "9f1c2d3e-4b5a-4c6d-8e7f-0a1b2c3d4e5f")]
    id: String,
    #[schema(example = "Kumari Silva")]
    name: String,
    email: String,
    phone: Option<String>,
    #[schema(example = "user")]
    role: String,
}

/// OpenAPI schema for [`crate::domain::Tour`].
///
/// `rating` and `reviewsCount` are derived from the tour's reviews.
#[derive(ToSchema)]
#[schema(as = crate::domain::Tour)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TourSchema {
    id: String,
    #[schema(example = "Ella Rock Trek")]
    name: String,
    description: String,
    price: f64,
    /// Length in days.
    duration: u32,
    #[schema(example = "Hill Country")]
    category: String,
    max_group_size: u32,
    #[schema(example = "Moderate")]
    difficulty: String,
    locations: Vec<String>,
    included: Vec<String>,
    images: Vec<String>,
    featured: bool,
    #[schema(example = 4.5)]
    rating: f64,
    #[schema(example = 0)]
    reviews_count: u32,
    created_at: String,
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::Vehicle`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Vehicle)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct VehicleSchema {
    id: String,
    name: String,
    #[serde(rename = "type")]
    #[schema(example = "SUV")]
    vehicle_type: String,
    description: String,
    price_per_day: f64,
    capacity: u32,
    #[schema(example = "Automatic")]
    transmission: String,
    #[schema(example = "Diesel")]
    fuel_type: String,
    features: Vec<String>,
    images: Vec<String>,
    available: bool,
    rating: f64,
    created_at: String,
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::Review`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Review)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewSchema {
    id: String,
    tour_id: String,
    user_id: String,
    #[schema(minimum = 1, maximum = 5, example = 5)]
    rating: u8,
    comment: String,
    created_at: String,
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::TourReview`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TourReview)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TourReviewSchema {
    id: String,
    tour_id: String,
    user_id: String,
    rating: u8,
    comment: String,
    /// Absent when the author account no longer resolves.
    author_name: Option<String>,
    created_at: String,
    updated_at: String,
}
