use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::catalog::dtos::OptionResponseDto;
use crate::features::catalog::services::CatalogService;
use crate::shared::types::{ApiResponse, Meta};

/// List all permitted development options
#[utoipa::path(
    get,
    path = "/api/options",
    responses(
        (status = 200, description = "Permitted development options in list order", body = ApiResponse<Vec<OptionResponseDto>>)
    ),
    tag = "options"
)]
pub async fn list_options(
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<ApiResponse<Vec<OptionResponseDto>>>> {
    let dtos: Vec<OptionResponseDto> = service.list().iter().map(Into::into).collect();
    let meta = Meta {
        total: dtos.len() as i64,
    };
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}
