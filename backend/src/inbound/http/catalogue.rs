//! Public tour and vehicle catalogue reads.
//!
//! ```text
//! GET /api/v1/tours?category=Beach&minPrice=50&featured=true
//! GET /api/v1/tours/{id}
//! GET /api/v1/vehicles?type=SUV&available=true
//! GET /api/v1/vehicles/{id}
//! ```
//!
//! Catalogue writes belong to the tour-management service; these routes are
//! read-only and need no session.

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Error, TourFilter, TourId, VehicleFilter, VehicleId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::public_catalogue_header;
use crate::inbound::http::envelope::{DataEnvelope, ListEnvelope};
use crate::inbound::http::schemas::{ErrorSchema, TourSchema, VehicleSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id, parse_label};

#[derive(Debug, Deserialize)]
struct IdPath {
    id: String,
}

/// Filters accepted by `GET /api/v1/tours`. Absent filters match everything.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TourQuery {
    /// Category label, e.g. `Hill Country`.
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Minimum length in days.
    pub min_duration: Option<u32>,
    pub max_duration: Option<u32>,
    pub featured: Option<bool>,
}

impl TryFrom<TourQuery> for TourFilter {
    type Error = Error;

    fn try_from(query: TourQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            category: query
                .category
                .as_deref()
                .map(|raw| parse_label(raw, FieldName::new("category")))
                .transpose()?,
            min_price: query.min_price,
            max_price: query.max_price,
            min_duration: query.min_duration,
            max_duration: query.max_duration,
            featured: query.featured,
        })
    }
}

/// Filters accepted by `GET /api/v1/vehicles`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VehicleQuery {
    /// Vehicle type label, e.g. `SUV`.
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub available: Option<bool>,
}

impl TryFrom<VehicleQuery> for VehicleFilter {
    type Error = Error;

    fn try_from(query: VehicleQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            vehicle_type: query
                .vehicle_type
                .as_deref()
                .map(|raw| parse_label(raw, FieldName::new("type")))
                .transpose()?,
            available: query.available,
        })
    }
}

/// List tours, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/tours",
    params(TourQuery),
    responses(
        (
            status = 200,
            description = "Matching tours",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = ListEnvelope<TourSchema>
        ),
        (status = 400, description = "Invalid filter", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "listTours",
    security([])
)]
#[get("/tours")]
pub async fn list_tours(
    state: web::Data<HttpState>,
    query: web::Query<TourQuery>,
) -> ApiResult<HttpResponse> {
    let filter = TourFilter::try_from(query.into_inner())?;
    let tours = state.catalogue.list_tours(&filter).await?;
    Ok(HttpResponse::Ok()
        .insert_header(public_catalogue_header())
        .json(ListEnvelope::new(tours)))
}

/// Fetch one tour.
#[utoipa::path(
    get,
    path = "/api/v1/tours/{id}",
    params(("id" = String, Path, description = "Tour identifier")),
    responses(
        (status = 200, description = "Tour", body = DataEnvelope<TourSchema>),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Tour not found", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "getTour",
    security([])
)]
#[get("/tours/{id}")]
pub async fn get_tour(
    state: web::Data<HttpState>,
    path: web::Path<IdPath>,
) -> ApiResult<HttpResponse> {
    let id: TourId = parse_id(&path.id, FieldName::new("id"))?;
    let tour = state.catalogue.get_tour(&id).await?;
    Ok(HttpResponse::Ok()
        .insert_header(public_catalogue_header())
        .json(DataEnvelope::new(tour)))
}

/// List vehicles, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/vehicles",
    params(VehicleQuery),
    responses(
        (status = 200, description = "Matching vehicles", body = ListEnvelope<VehicleSchema>),
        (status = 400, description = "Invalid filter", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "listVehicles",
    security([])
)]
#[get("/vehicles")]
pub async fn list_vehicles(
    state: web::Data<HttpState>,
    query: web::Query<VehicleQuery>,
) -> ApiResult<HttpResponse> {
    let filter = VehicleFilter::try_from(query.into_inner())?;
    let vehicles = state.catalogue.list_vehicles(&filter).await?;
    Ok(HttpResponse::Ok()
        .insert_header(public_catalogue_header())
        .json(ListEnvelope::new(vehicles)))
}

/// Fetch one vehicle.
#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{id}",
    params(("id" = String, Path, description = "Vehicle identifier")),
    responses(
        (status = 200, description = "Vehicle", body = DataEnvelope<VehicleSchema>),
        (status = 404, description = "Vehicle not found", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "getVehicle",
    security([])
)]
#[get("/vehicles/{id}")]
pub async fn get_vehicle(
    state: web::Data<HttpState>,
    path: web::Path<IdPath>,
) -> ApiResult<HttpResponse> {
    let id: VehicleId = parse_id(&path.id, FieldName::new("id"))?;
    let vehicle = state.catalogue.get_vehicle(&id).await?;
    Ok(HttpResponse::Ok()
        .insert_header(public_catalogue_header())
        .json(DataEnvelope::new(vehicle)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_tours)
        .service(get_tour)
        .service(list_vehicles)
        .service(get_vehicle);
}
