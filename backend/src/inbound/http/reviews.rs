//! Review HTTP handlers.
//!
//! ```text
//! POST /api/v1/reviews {"tour":"<uuid>","rating":5,"comment":"Great guide"}
//! GET /api/v1/reviews/{tourId}
//! DELETE /api/v1/reviews/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Review, ReviewId, ReviewValidationError, TourId, TourReview};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{DataEnvelope, ListEnvelope, MessageEnvelope};
use crate::inbound::http::schemas::{ErrorSchema, ReviewSchema, TourReviewSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, field_error, parse_id, require};

#[derive(Debug, Deserialize)]
struct TourPath {
    #[serde(rename = "tourId")]
    tour_id: String,
}

#[derive(Debug, Deserialize)]
struct ReviewPath {
    id: String,
}

/// Request payload for `POST /api/v1/reviews`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[schema(format = "uuid")]
    pub tour: Option<String>,
    #[schema(minimum = 1, maximum = 5)]
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

struct ParsedReview {
    tour_id: TourId,
    rating: u8,
    comment: String,
}

impl ReviewRequest {
    fn parse(self) -> Result<ParsedReview, Error> {
        let tour_id = parse_id(
            &require(self.tour, FieldName::new("tour"))?,
            FieldName::new("tour"),
        )?;
        let raw_rating = require(self.rating, FieldName::new("rating"))?;
        let rating = u8::try_from(raw_rating).map_err(|_| {
            let err = ReviewValidationError::RatingOutOfRange;
            field_error(err.field(), err.code(), err.to_string())
        })?;
        Ok(ParsedReview {
            tour_id,
            rating,
            comment: self.comment.unwrap_or_default(),
        })
    }
}

/// Post a review of a tour.
#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    request_body = ReviewRequest,
    responses(
        (status = 201, description = "Review created", body = DataEnvelope<ReviewSchema>),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Tour not found", body = ErrorSchema),
        (status = 409, description = "Tour already reviewed by caller", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "createReview"
)]
#[post("/reviews")]
pub async fn create_review(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ReviewRequest>,
) -> ApiResult<HttpResponse> {
    let requester = session.require_requester()?;
    let ParsedReview {
        tour_id,
        rating,
        comment,
    } = payload.into_inner().parse()?;
    let review: Review = state
        .reviews
        .create(&requester, tour_id, rating, comment)
        .await?;
    Ok(HttpResponse::Created().json(DataEnvelope::new(review)))
}

/// Public list of a tour's reviews, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/reviews/{tourId}",
    params(("tourId" = String, Path, description = "Tour identifier")),
    responses(
        (status = 200, description = "Reviews", body = ListEnvelope<TourReviewSchema>),
        (status = 400, description = "Malformed identifier", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "listTourReviews",
    security([])
)]
#[get("/reviews/{tourId}")]
pub async fn list_tour_reviews(
    state: web::Data<HttpState>,
    path: web::Path<TourPath>,
) -> ApiResult<web::Json<ListEnvelope<TourReview>>> {
    let tour_id: TourId = parse_id(&path.tour_id, FieldName::new("tourId"))?;
    let reviews = state.reviews_query.list_for_tour(&tour_id).await?;
    Ok(web::Json(ListEnvelope::new(reviews)))
}

/// Delete a review. Owner or administrator.
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    responses(
        (status = 200, description = "Review deleted", body = MessageEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "Review not found", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "deleteReview"
)]
#[delete("/reviews/{id}")]
pub async fn delete_review(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<ReviewPath>,
) -> ApiResult<web::Json<MessageEnvelope>> {
    let requester = session.require_requester()?;
    let id: ReviewId = parse_id(&path.id, FieldName::new("id"))?;
    state.reviews.delete(&requester, &id).await?;
    Ok(web::Json(MessageEnvelope::new("Review deleted successfully")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_review)
        .service(list_tour_reviews)
        .service(delete_review);
}

#[cfg(test)]
#[path = "reviews_tests.rs"]
mod tests;
