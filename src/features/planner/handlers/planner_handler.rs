use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::HeaderName, HeaderValue},
    response::{Html, IntoResponse, Response},
    Json,
};
use minijinja::Value;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, SessionKey};
use crate::features::planner::dtos::{SceneDto, SearchRequestDto, SelectionRequestDto};
use crate::features::planner::services::PlannerService;
use crate::shared::constants::SESSION_HEADER;
use crate::shared::templates::render_template;
use crate::shared::types::ApiResponse;

/// Scene response that also hands the session id back to the page
fn scene_response(session: SessionKey, scene: SceneDto) -> Response {
    if session.is_new {
        tracing::info!("Started planner session {}", session.id);
    }
    let mut response = Json(ApiResponse::success(Some(scene), None, None)).into_response();
    if let Ok(value) = HeaderValue::from_str(&session.id.to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(SESSION_HEADER), value);
    }
    response
}

/// Two-pane planner page
pub async fn index(State(service): State<Arc<PlannerService>>) -> Result<Html<String>> {
    let page = service.page();
    let mut ctx: HashMap<&str, Value> = HashMap::new();
    ctx.insert("page_title", Value::from(page.title.as_str()));
    ctx.insert("logo_url", Value::from(page.logo_url.as_str()));

    let html = render_template("index.html.jinja", &ctx)?;
    Ok(Html(html))
}

/// Current scene of the session
#[utoipa::path(
    get,
    path = "/api/planner/scene",
    params(
        ("x-session-id" = Option<String>, Header, description = "Planner session id; omit to start a session")
    ),
    responses(
        (status = 200, description = "Rendered scene", body = ApiResponse<SceneDto>),
        (status = 400, description = "Malformed session id")
    ),
    tag = "planner"
)]
pub async fn get_scene(
    State(service): State<Arc<PlannerService>>,
    session: SessionKey,
) -> Result<Response> {
    let scene = service.scene(session.id).await?;
    Ok(scene_response(session, scene))
}

/// Search an address and re-render the scene
#[utoipa::path(
    post,
    path = "/api/planner/search",
    request_body = SearchRequestDto,
    params(
        ("x-session-id" = Option<String>, Header, description = "Planner session id; omit to start a session")
    ),
    responses(
        (status = 200, description = "Rendered scene; no map when the address had no match", body = ApiResponse<SceneDto>),
        (status = 400, description = "Invalid request"),
        (status = 502, description = "Geocoder unavailable")
    ),
    tag = "planner"
)]
pub async fn search(
    State(service): State<Arc<PlannerService>>,
    session: SessionKey,
    AppJson(dto): AppJson<SearchRequestDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let scene = service.search(session.id, &dto.address).await?;
    Ok(scene_response(session, scene))
}

/// Check or uncheck a permitted development option
#[utoipa::path(
    post,
    path = "/api/planner/selection",
    request_body = SelectionRequestDto,
    params(
        ("x-session-id" = Option<String>, Header, description = "Planner session id; omit to start a session")
    ),
    responses(
        (status = 200, description = "Rendered scene with at most one overlay", body = ApiResponse<SceneDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Option not found"),
        (status = 500, description = "Boundary file missing or malformed")
    ),
    tag = "planner"
)]
pub async fn toggle_selection(
    State(service): State<Arc<PlannerService>>,
    session: SessionKey,
    AppJson(dto): AppJson<SelectionRequestDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let scene = service
        .toggle_option(session.id, &dto.option, dto.checked)
        .await?;
    Ok(scene_response(session, scene))
}
