use crate::features::boundaries::{BoundaryPolygon, KmlError};
use crate::features::catalog::{CatalogService, PermittedOption};
use crate::features::planner::dtos::{
    LatLonDto, MapFigureDto, MarkerDto, OptionRowDto, OverlayDto, SceneDto, TileLayerDto,
};
use crate::features::planner::models::ViewState;
use crate::shared::constants::{
    MARKER_COLOR, MARKER_SIZE, OVERLAY_FILL_COLOR, OVERLAY_LINE_COLOR, OVERLAY_LINE_WIDTH,
    TILE_ATTRIBUTION,
};

/// Render the full scene for a state snapshot.
///
/// Only `load_boundary` touches the outside world; it is called at most once,
/// for the selected option, and its failure fails the whole render.
pub fn render_scene<F>(
    state: &ViewState,
    catalog: &CatalogService,
    load_boundary: F,
) -> Result<SceneDto, KmlError>
where
    F: FnOnce(&PermittedOption) -> Result<BoundaryPolygon, KmlError>,
{
    let mut scene = SceneDto {
        address: state.address.clone(),
        error: state.tiles.error().map(str::to_string),
        selected_option: state.selection.current().map(str::to_string),
        map: None,
        options: None,
    };

    if !state.map_visible() {
        return Ok(scene);
    }
    let (Some(url_template), Some(location), Some(view)) = (
        state.tiles.url_template(),
        state.location.as_ref(),
        state.map_view,
    ) else {
        return Ok(scene);
    };

    let overlay = match state.selection.current() {
        Some(name) => match catalog.find(name) {
            Some(option) => {
                let polygon = load_boundary(option)?;
                Some(OverlayDto {
                    name: option.name.clone(),
                    lats: polygon.lats,
                    lons: polygon.lons,
                    line_color: OVERLAY_LINE_COLOR.to_string(),
                    line_width: OVERLAY_LINE_WIDTH,
                    fill_color: OVERLAY_FILL_COLOR.to_string(),
                })
            }
            None => {
                tracing::warn!("Selected option '{}' is not in the catalog", name);
                None
            }
        },
        None => None,
    };

    scene.map = Some(MapFigureDto {
        tile_layer: TileLayerDto {
            url_template: url_template.to_string(),
            attribution: TILE_ATTRIBUTION.to_string(),
        },
        center: LatLonDto {
            lat: view.lat,
            lon: view.lon,
        },
        zoom: view.zoom,
        marker: MarkerDto {
            lat: location.latitude,
            lon: location.longitude,
            text: location.address.clone(),
            color: MARKER_COLOR.to_string(),
            size: MARKER_SIZE,
        },
        overlay,
    });

    scene.options = Some(
        catalog
            .list()
            .iter()
            .map(|option| OptionRowDto {
                name: option.name.clone(),
                description: option.description.clone(),
                thumbnail_url: option.thumbnail_url(),
                checked: state.selection.is_selected(&option.name),
            })
            .collect(),
    );

    Ok(scene)
}
