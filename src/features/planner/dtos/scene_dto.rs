use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Search request from the address box
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SearchRequestDto {
    /// Free-text address; an empty address clears the map
    #[validate(length(max = 512, message = "Address must not exceed 512 characters"))]
    pub address: String,
}

/// Checkbox change in the options panel
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SelectionRequestDto {
    #[validate(length(min = 1, message = "Option name is required"))]
    pub option: String,
    pub checked: bool,
}

/// Full render of one session, consumed by the page as-is
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SceneDto {
    pub address: String,
    /// Inline error, e.g. a failed tile session
    pub error: Option<String>,
    pub selected_option: Option<String>,
    /// Absent unless the latest search resolved on a working tile session
    pub map: Option<MapFigureDto>,
    /// Right-hand options panel, shown together with the map
    pub options: Option<Vec<OptionRowDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapFigureDto {
    pub tile_layer: TileLayerDto,
    pub center: LatLonDto,
    pub zoom: f64,
    pub marker: MarkerDto,
    pub overlay: Option<OverlayDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerDto {
    pub url_template: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct LatLonDto {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkerDto {
    pub lat: f64,
    pub lon: f64,
    pub text: String,
    pub color: String,
    pub size: u32,
}

/// Filled polygon of the selected option
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverlayDto {
    pub name: String,
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
    pub line_color: String,
    pub line_width: u32,
    pub fill_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionRowDto {
    pub name: String,
    pub description: String,
    pub thumbnail_url: String,
    pub checked: bool,
}
