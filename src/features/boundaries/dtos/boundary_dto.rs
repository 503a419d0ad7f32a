use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::boundaries::models::BoundaryPolygon;

/// Parsed boundary of one option
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryResponseDto {
    pub name: String,
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
}

impl BoundaryResponseDto {
    pub fn new(name: String, polygon: BoundaryPolygon) -> Self {
        Self {
            name,
            lats: polygon.lats,
            lons: polygon.lons,
        }
    }
}
