use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::geocoding::dtos::{GeocodeQuery, LocationResponseDto};
use crate::features::geocoding::services::GeocodingService;
use crate::shared::types::ApiResponse;

/// Resolve an address to coordinates (first match only)
#[utoipa::path(
    get,
    path = "/api/geocode",
    params(GeocodeQuery),
    responses(
        (status = 200, description = "First match, or no data when nothing matched", body = ApiResponse<LocationResponseDto>),
        (status = 400, description = "Invalid address"),
        (status = 502, description = "Geocoder unavailable")
    ),
    tag = "geocoding"
)]
pub async fn geocode(
    State(service): State<Arc<GeocodingService>>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<ApiResponse<LocationResponseDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let address = query.address.trim();
    if address.is_empty() {
        return Err(AppError::Validation("Address must not be blank".to_string()));
    }

    let response = match service.geocode(address).await? {
        Some(location) => ApiResponse::success(Some(location.into()), None, None),
        None => ApiResponse::success(None, Some("No match found".to_string()), None),
    };
    Ok(Json(response))
}
