use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::geocoding::models::ResolvedLocation;

/// Query parameters for a one-off address lookup
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct GeocodeQuery {
    /// Free-text address
    #[param(example = "10 Downing Street, London")]
    #[validate(length(min = 1, max = 512, message = "Address must be 1 to 512 characters"))]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponseDto {
    pub lat: f64,
    pub lon: f64,
    pub address: String,
}

impl From<ResolvedLocation> for LocationResponseDto {
    fn from(location: ResolvedLocation) -> Self {
        Self {
            lat: location.latitude,
            lon: location.longitude,
            address: location.address,
        }
    }
}
