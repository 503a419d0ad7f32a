use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::geocoding::handlers;
use crate::features::geocoding::services::GeocodingService;

/// Create routes for address lookups
pub fn routes(service: Arc<GeocodingService>) -> Router {
    Router::new()
        .route("/api/geocode", get(handlers::geocode))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GeocoderConfig;
    use crate::shared::test_helpers::spawn_fake_service;
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        Json,
    };
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn server(calls: Arc<AtomicUsize>) -> TestServer {
        let geocoder = Router::new()
            .route(
                "/search",
                get(
                    |State(calls): State<Arc<AtomicUsize>>,
                     Query(params): Query<HashMap<String, String>>| async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        match params.get("q").map(String::as_str) {
                            Some("10 Downing Street") => Json(json!([
                                {"lat": "51.5034", "lon": "-0.1276", "display_name": "10 Downing Street, London"}
                            ])),
                            _ => Json(json!([])),
                        }
                    },
                ),
            )
            .with_state(calls);
        let base_url = spawn_fake_service(geocoder).await;

        let service = GeocodingService::new(&GeocoderConfig {
            base_url,
            user_agent: "test".into(),
            country_codes: None,
        })
        .unwrap();

        TestServer::new(routes(Arc::new(service))).unwrap()
    }

    #[tokio::test]
    async fn test_geocode_trims_address() {
        let calls = Arc::new(AtomicUsize::new(0));
        let server = server(calls.clone()).await;

        let response = server
            .get("/api/geocode")
            .add_query_param("address", "  10 Downing Street ")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["address"], "10 Downing Street, London");
        assert_eq!(body["data"]["lat"], 51.5034);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_address_rejected_without_lookup() {
        let calls = Arc::new(AtomicUsize::new(0));
        let server = server(calls.clone()).await;

        let response = server
            .get("/api/geocode")
            .add_query_param("address", "   ")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_match_has_no_data() {
        let calls = Arc::new(AtomicUsize::new(0));
        let server = server(calls).await;

        let response = server
            .get("/api/geocode")
            .add_query_param("address", "Atlantis")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["message"], "No match found");
    }
}
