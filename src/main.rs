mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::boundaries::{routes as boundaries_routes, BoundaryService};
use crate::features::catalog::{routes as catalog_routes, CatalogService};
use crate::features::geocoding::{routes as geocoding_routes, GeocodingService};
use crate::features::planner::{
    routes as planner_routes, PageSettings, PlannerService, SessionStore, ViewRules,
};
use crate::features::tiles::TileSessionService;
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    // Static option list, read once
    let catalog = Arc::new(
        CatalogService::from_csv_path(&config.catalog.options_csv)
            .map_err(|e| anyhow::anyhow!("Failed to load option list: {}", e))?,
    );
    tracing::info!(
        "Loaded {} permitted development options from {}",
        catalog.len(),
        config.catalog.options_csv.display()
    );

    let boundary_service = Arc::new(BoundaryService::new(
        config.catalog.kml_dir.clone(),
        Arc::clone(&catalog),
    ));
    tracing::info!(
        "Boundary service reading KML from {}",
        config.catalog.kml_dir.display()
    );

    let geocoding_service = Arc::new(
        GeocodingService::new(&config.geocoder)
            .map_err(|e| anyhow::anyhow!("Failed to create geocoder client: {}", e))?,
    );
    tracing::info!("Geocoding service initialized ({})", config.geocoder.base_url);

    // The tile session itself is created lazily on the first interaction
    let tile_service = Arc::new(TileSessionService::new(config.maps.clone()));
    tracing::info!(
        "Tile session service initialized (mapType={}, lock_center={})",
        config.maps.map_type,
        config.maps.lock_center
    );

    let planner_service = Arc::new(PlannerService::new(
        Arc::clone(&catalog),
        Arc::clone(&boundary_service),
        Arc::clone(&geocoding_service),
        tile_service,
        SessionStore::new(config.session.idle_ttl),
        ViewRules {
            default_zoom: config.maps.default_zoom,
            lock_center: config.maps.lock_center,
        },
        PageSettings {
            title: config.app.page_title.clone(),
            logo_url: config.app.logo_url.clone(),
        },
    ));
    tracing::info!("Planner service initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let app = Router::new()
        .merge(swagger)
        .merge(planner_routes::routes(planner_service))
        .merge(catalog_routes::routes(catalog))
        .merge(boundaries_routes::routes(boundary_service))
        .merge(geocoding_routes::routes(geocoding_service))
        .merge(health_route)
        .nest_service("/images", ServeDir::new(&config.catalog.images_dir))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
