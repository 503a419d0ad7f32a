use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::planner::handlers;
use crate::features::planner::services::PlannerService;

/// Create routes for the planner page and its interactions
pub fn routes(service: Arc<PlannerService>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/planner/scene", get(handlers::get_scene))
        .route("/api/planner/search", post(handlers::search))
        .route("/api/planner/selection", post(handlers::toggle_selection))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{GeocoderConfig, MapsConfig};
    use crate::features::boundaries::BoundaryService;
    use crate::features::catalog::CatalogService;
    use crate::features::geocoding::GeocodingService;
    use crate::features::planner::models::ViewRules;
    use crate::features::planner::services::{PageSettings, SessionStore};
    use crate::features::tiles::TileSessionService;
    use crate::shared::constants::SESSION_HEADER;
    use crate::shared::test_helpers::spawn_fake_service;
    use axum::http::{header::HeaderName, HeaderValue, StatusCode};
    use axum::Json;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::time::Duration;

    async fn server(kml_dir: &std::path::Path) -> TestServer {
        let geocoder_base = spawn_fake_service(Router::new().route(
            "/search",
            get(|| async {
                Json(json!([
                    {"lat": "53.4", "lon": "-2.2", "display_name": "Piccadilly, Manchester"}
                ]))
            }),
        ))
        .await;
        let tiles_base = spawn_fake_service(Router::new().route(
            "/v1/createSession",
            post(|| async { Json(json!({"session": "route-token"})) }),
        ))
        .await;

        let catalog = Arc::new(
            CatalogService::from_reader(
                "Permitted Development Options,Description,thumbnail,kml\n\
                 Rear Extension,Up to 3m,rear.png,rear.kml\n\
                 Porch,Front porch,porch.png,porch.kml\n"
                    .as_bytes(),
            )
            .unwrap(),
        );
        std::fs::write(
            kml_dir.join("rear.kml"),
            r#"<kml xmlns="http://www.opengis.net/kml/2.2"><coordinates>-2.2,53.4,0 -2.3,53.5,0 -2.1,53.5,0</coordinates></kml>"#,
        )
        .unwrap();
        std::fs::write(
            kml_dir.join("porch.kml"),
            r#"<kml xmlns="http://www.opengis.net/kml/2.2"><coordinates>-2.0,53.0,0</coordinates></kml>"#,
        )
        .unwrap();

        let service = PlannerService::new(
            catalog.clone(),
            Arc::new(BoundaryService::new(kml_dir, catalog)),
            Arc::new(
                GeocodingService::new(&GeocoderConfig {
                    base_url: geocoder_base,
                    user_agent: "test".into(),
                    country_codes: None,
                })
                .unwrap(),
            ),
            Arc::new(TileSessionService::new(MapsConfig {
                api_key: "route-key".into(),
                tile_base_url: tiles_base,
                map_type: "satellite".into(),
                language: "en-US".into(),
                region: "US".into(),
                default_zoom: 17.5,
                lock_center: false,
            })),
            SessionStore::new(Duration::from_secs(60)),
            ViewRules {
                default_zoom: 17.5,
                lock_center: false,
            },
            PageSettings {
                title: "Permitted Development Search".into(),
                logo_url: "https://example.com/logo.png".into(),
            },
        );

        TestServer::new(routes(Arc::new(service))).unwrap()
    }

    fn session_header() -> HeaderName {
        HeaderName::from_static(SESSION_HEADER)
    }

    #[tokio::test]
    async fn test_new_session_gets_id() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path()).await;

        let response = server.get("/api/planner/scene").await;
        response.assert_status_ok();

        let id = response.header(session_header());
        assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());

        let body: Value = response.json();
        assert_eq!(body["data"]["map"], Value::Null);
        assert_eq!(body["data"]["error"], Value::Null);
    }

    #[tokio::test]
    async fn test_search_then_select_flow() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path()).await;

        let response = server
            .post("/api/planner/search")
            .json(&json!({"address": "Piccadilly"}))
            .await;
        response.assert_status_ok();
        let id = response.header(session_header());

        let body: Value = response.json();
        assert_eq!(body["data"]["map"]["marker"]["text"], "Piccadilly, Manchester");
        assert_eq!(
            body["data"]["map"]["tileLayer"]["urlTemplate"]
                .as_str()
                .unwrap()
                .matches("route-token")
                .count(),
            1
        );
        assert_eq!(body["data"]["options"].as_array().unwrap().len(), 2);

        let select = |option: &str, checked: bool| {
            server
                .post("/api/planner/selection")
                .add_header(session_header(), id.clone())
                .json(&json!({"option": option, "checked": checked}))
        };

        let body: Value = select("Rear Extension", true).await.json();
        assert_eq!(body["data"]["map"]["overlay"]["name"], "Rear Extension");

        let body: Value = select("Porch", true).await.json();
        assert_eq!(body["data"]["selectedOption"], "Porch");
        let checked: Vec<&str> = body["data"]["options"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|o| o["checked"] == true)
            .map(|o| o["name"].as_str().unwrap())
            .collect();
        assert_eq!(checked, vec!["Porch"]);

        let body: Value = select("Porch", false).await.json();
        assert_eq!(body["data"]["selectedOption"], Value::Null);
        assert_eq!(body["data"]["map"]["overlay"], Value::Null);
    }

    #[tokio::test]
    async fn test_invalid_requests() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path()).await;

        let bad_session = server
            .get("/api/planner/scene")
            .add_header(session_header(), HeaderValue::from_static("not-a-uuid"))
            .await;
        assert_eq!(bad_session.status_code(), StatusCode::BAD_REQUEST);

        let unknown = server
            .post("/api/planner/selection")
            .json(&json!({"option": "Basement", "checked": true}))
            .await;
        assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);

        let missing_field = server
            .post("/api/planner/search")
            .json(&json!({"query": "Piccadilly"}))
            .await;
        assert_eq!(missing_field.status_code(), StatusCode::BAD_REQUEST);

        let too_long = server
            .post("/api/planner/search")
            .json(&json!({"address": "x".repeat(600)}))
            .await;
        assert_eq!(too_long.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_index_page() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path()).await;

        let response = server.get("/").await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Permitted Development Search"));
        assert!(html.contains("https:&#x2f;&#x2f;example.com&#x2f;logo.png"));
    }
}
