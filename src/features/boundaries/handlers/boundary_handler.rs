use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::boundaries::dtos::BoundaryResponseDto;
use crate::features::boundaries::services::BoundaryService;
use crate::shared::types::ApiResponse;

/// Get the parsed boundary polygon of an option
#[utoipa::path(
    get,
    path = "/api/options/{name}/boundary",
    params(
        ("name" = String, Path, description = "Option name as listed in the catalog")
    ),
    responses(
        (status = 200, description = "Boundary vertices in file order", body = ApiResponse<BoundaryResponseDto>),
        (status = 404, description = "Option not found"),
        (status = 500, description = "Boundary file missing or malformed")
    ),
    tag = "options"
)]
pub async fn get_boundary(
    State(service): State<Arc<BoundaryService>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<BoundaryResponseDto>>> {
    let (option, polygon) = service.load_by_name(&name)?;
    Ok(Json(ApiResponse::success(
        Some(BoundaryResponseDto::new(option.name, polygon)),
        None,
        None,
    )))
}
