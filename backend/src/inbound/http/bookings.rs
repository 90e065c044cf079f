//! Booking HTTP handlers.
//!
//! ```text
//! POST /api/v1/bookings
//! GET /api/v1/bookings/my-bookings
//! GET /api/v1/bookings
//! GET /api/v1/bookings/{id}
//! PUT /api/v1/bookings/{id}
//! DELETE /api/v1/bookings/{id}
//! ```
//!
//! Every route needs a session. Ownership and role checks happen behind the
//! booking ports; handlers only parse the wire format.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::envelope::{DataEnvelope, ListEnvelope, MessageEnvelope};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

#[path = "bookings_dto.rs"]
mod dto;

use dto::{BookingPath, parse_booking_id};
pub use dto::{
    BookingDetailResponse, BookingListingResponse, BookingRequest, BookingResponse,
    BookingStatusRequest,
};

/// Create a booking owned by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Booking created", body = DataEnvelope<BookingResponse>),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<BookingRequest>,
) -> ApiResult<HttpResponse> {
    let requester = session.require_requester()?;
    let draft = payload.into_inner().into_draft()?;
    let booking = state.bookings.create(&requester, draft).await?;
    Ok(HttpResponse::Created().json(DataEnvelope::new(BookingResponse::from(booking))))
}

/// The caller's bookings, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/bookings/my-bookings",
    responses(
        (
            status = 200,
            description = "Caller's bookings",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = ListEnvelope<BookingListingResponse>
        ),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "listMyBookings"
)]
#[get("/bookings/my-bookings")]
pub async fn list_my_bookings(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let requester = session.require_requester()?;
    let listings = state.bookings_query.list_mine(&requester).await?;
    let body: ListEnvelope<BookingListingResponse> =
        listings.into_iter().map(BookingListingResponse::from).collect();
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(body))
}

/// Every booking with owner details. Administrators only.
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    responses(
        (status = 200, description = "All bookings", body = ListEnvelope<BookingListingResponse>),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Administrator role required", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "listAllBookings"
)]
#[get("/bookings")]
pub async fn list_all_bookings(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let requester = session.require_requester()?;
    let listings = state.bookings_query.list_all(&requester).await?;
    let body: ListEnvelope<BookingListingResponse> =
        listings.into_iter().map(BookingListingResponse::from).collect();
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(body))
}

/// One booking with its target and owner resolved.
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    params(("id" = String, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "Booking", body = DataEnvelope<BookingDetailResponse>),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not the owner", body = ErrorSchema),
        (status = 404, description = "Booking not found", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "getBooking"
)]
#[get("/bookings/{id}")]
pub async fn get_booking(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<BookingPath>,
) -> ApiResult<HttpResponse> {
    let requester = session.require_requester()?;
    let id = parse_booking_id(&path.id)?;
    let detail = state.bookings_query.get(&requester, &id).await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(DataEnvelope::new(BookingDetailResponse::from(detail))))
}

/// Set a booking's status. Administrators only.
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}",
    params(("id" = String, Path, description = "Booking identifier")),
    request_body = BookingStatusRequest,
    responses(
        (status = 200, description = "Booking updated", body = DataEnvelope<BookingResponse>),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Administrator role required", body = ErrorSchema),
        (status = 404, description = "Booking not found", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "updateBookingStatus"
)]
#[put("/bookings/{id}")]
pub async fn update_booking_status(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<BookingPath>,
    payload: web::Json<BookingStatusRequest>,
) -> ApiResult<web::Json<DataEnvelope<BookingResponse>>> {
    let requester = session.require_requester()?;
    let id = parse_booking_id(&path.id)?;
    let status = payload.into_inner().into_status()?;
    let booking = state
        .bookings
        .update_status(&requester, &id, status)
        .await?;
    Ok(web::Json(DataEnvelope::new(booking.into())))
}

/// Cancel a booking. Owner or administrator; repeat calls succeed.
#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{id}",
    params(("id" = String, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "Booking cancelled", body = MessageEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not the owner", body = ErrorSchema),
        (status = 404, description = "Booking not found", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "cancelBooking"
)]
#[delete("/bookings/{id}")]
pub async fn cancel_booking(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<BookingPath>,
) -> ApiResult<web::Json<MessageEnvelope>> {
    let requester = session.require_requester()?;
    let id = parse_booking_id(&path.id)?;
    state.bookings.cancel(&requester, &id).await?;
    Ok(web::Json(MessageEnvelope::new("Booking cancelled successfully")))
}

/// Register booking routes. `my-bookings` must precede `{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_booking)
        .service(list_my_bookings)
        .service(list_all_bookings)
        .service(get_booking)
        .service(update_booking_status)
        .service(cancel_booking);
}

#[cfg(test)]
#[path = "bookings_tests.rs"]
mod tests;
