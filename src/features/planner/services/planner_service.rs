use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::boundaries::BoundaryService;
use crate::features::catalog::CatalogService;
use crate::features::geocoding::GeocodingService;
use crate::features::planner::dtos::SceneDto;
use crate::features::planner::models::{TileStatus, ViewEvent, ViewRules, ViewState};
use crate::features::planner::services::scene_renderer::render_scene;
use crate::features::planner::services::session_store::SessionStore;
use crate::features::tiles::TileSessionService;

/// Static page settings for the HTML shell
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub title: String,
    pub logo_url: String,
}

/// Drives one interaction: event -> reducer -> stored snapshot -> render
pub struct PlannerService {
    catalog: Arc<CatalogService>,
    boundaries: Arc<BoundaryService>,
    geocoder: Arc<GeocodingService>,
    tiles: Arc<TileSessionService>,
    sessions: SessionStore,
    rules: ViewRules,
    page: PageSettings,
}

impl PlannerService {
    pub fn new(
        catalog: Arc<CatalogService>,
        boundaries: Arc<BoundaryService>,
        geocoder: Arc<GeocodingService>,
        tiles: Arc<TileSessionService>,
        sessions: SessionStore,
        rules: ViewRules,
        page: PageSettings,
    ) -> Self {
        Self {
            catalog,
            boundaries,
            geocoder,
            tiles,
            sessions,
            rules,
            page,
        }
    }

    pub fn page(&self) -> &PageSettings {
        &self.page
    }

    /// Render the current state of a session
    pub async fn scene(&self, session_id: Uuid) -> Result<SceneDto> {
        let mut session = self.sessions.checkout(session_id).await;
        let state = self.with_tiles(session_id, session.clone()).await;
        self.commit(&mut session, state)
    }

    /// Search an address and re-render.
    ///
    /// The geocoder is only asked when the address is non-empty and the tile
    /// session works; otherwise the search resolves to no location.
    pub async fn search(&self, session_id: Uuid, address: &str) -> Result<SceneDto> {
        let mut session = self.sessions.checkout(session_id).await;
        let state = self.with_tiles(session_id, session.clone()).await;
        let address = address.trim().to_string();

        let location = if !address.is_empty() && matches!(state.tiles, TileStatus::Ready { .. }) {
            let location = self.geocoder.geocode(&address).await?;
            if location.is_none() {
                tracing::info!("No geocoding match for '{}'", address);
            }
            location
        } else {
            None
        };

        let state = state.apply(ViewEvent::AddressSearched { address, location }, &self.rules);
        self.commit(&mut session, state)
    }

    /// Check or uncheck an option and re-render
    pub async fn toggle_option(
        &self,
        session_id: Uuid,
        option: &str,
        checked: bool,
    ) -> Result<SceneDto> {
        let name = self.catalog.get(option)?.name.clone();
        let mut session = self.sessions.checkout(session_id).await;
        let state = self.with_tiles(session_id, session.clone()).await;

        tracing::debug!(
            "Session {}: option '{}' {}",
            session_id,
            name,
            if checked { "checked" } else { "unchecked" }
        );

        let state = state.apply(ViewEvent::OptionToggled { name, checked }, &self.rules);
        self.commit(&mut session, state)
    }

    /// Resolve the tile session on the session's first interaction
    async fn with_tiles(&self, session_id: Uuid, state: ViewState) -> ViewState {
        if state.tiles != TileStatus::Pending {
            return state;
        }

        let result = self.tiles.tile_url_template().await.map_err(|e| {
            tracing::error!("Tile session unavailable for session {}: {}", session_id, e);
            e.to_string()
        });
        state.apply(ViewEvent::TileSessionResolved(result), &self.rules)
    }

    /// Store the new snapshot in the locked session, then render it
    fn commit(&self, session: &mut ViewState, state: ViewState) -> Result<SceneDto> {
        *session = state;

        let scene = render_scene(session, &self.catalog, |option| self.boundaries.load(option))?;
        Ok(scene)
    }
}
