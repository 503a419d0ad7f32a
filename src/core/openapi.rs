use utoipa::{Modify, OpenApi};

use crate::features::boundaries::{dtos as boundaries_dtos, handlers as boundaries_handlers};
use crate::features::catalog::{dtos as catalog_dtos, handlers as catalog_handlers};
use crate::features::geocoding::{dtos as geocoding_dtos, handlers as geocoding_handlers};
use crate::features::planner::{dtos as planner_dtos, handlers as planner_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Planner
        planner_handlers::get_scene,
        planner_handlers::search,
        planner_handlers::toggle_selection,
        // Options
        catalog_handlers::list_options,
        boundaries_handlers::get_boundary,
        // Geocoding
        geocoding_handlers::geocode,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Planner
            planner_dtos::SearchRequestDto,
            planner_dtos::SelectionRequestDto,
            planner_dtos::SceneDto,
            planner_dtos::MapFigureDto,
            planner_dtos::TileLayerDto,
            planner_dtos::LatLonDto,
            planner_dtos::MarkerDto,
            planner_dtos::OverlayDto,
            planner_dtos::OptionRowDto,
            ApiResponse<planner_dtos::SceneDto>,
            // Options
            catalog_dtos::OptionResponseDto,
            ApiResponse<Vec<catalog_dtos::OptionResponseDto>>,
            boundaries_dtos::BoundaryResponseDto,
            ApiResponse<boundaries_dtos::BoundaryResponseDto>,
            // Geocoding
            geocoding_dtos::LocationResponseDto,
            ApiResponse<geocoding_dtos::LocationResponseDto>,
        )
    ),
    tags(
        (name = "planner", description = "Address search, option selection and map scene"),
        (name = "options", description = "Permitted development options and their boundaries"),
        (name = "geocoding", description = "Address lookup"),
    ),
    info(
        title = "Permitted Development Search API",
        version = "0.1.0",
        description = "API documentation for the permitted development address search",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
