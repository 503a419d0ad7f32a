use std::sync::Arc;

use reqwest::StatusCode;
use tokio::sync::RwLock;

use crate::core::config::MapsConfig;
use crate::features::tiles::models::{CreateSessionRequest, CreateSessionResponse, TileSession};

#[derive(Debug, thiserror::Error)]
pub enum TileSessionError {
    #[error("Failed to reach tile service: {0}")]
    Request(String),

    #[error("Failed to create session: {0}")]
    Rejected(String),

    #[error("Failed to parse session response: {0}")]
    Parse(String),
}

/// Creates and caches the tile session.
///
/// The first successful session is kept for the whole process; there is no
/// renewal or expiry handling. Failures are not cached here.
pub struct TileSessionService {
    config: MapsConfig,
    client: reqwest::Client,
    cache: Arc<RwLock<Option<TileSession>>>,
}

impl TileSessionService {
    pub fn new(config: MapsConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Get the tile session, creating it on first use
    pub async fn get_session(&self) -> Result<TileSession, TileSessionError> {
        {
            let cache = self.cache.read().await;
            if let Some(ref session) = *cache {
                tracing::debug!("Using cached tile session");
                return Ok(session.clone());
            }
        }

        let mut cache = self.cache.write().await;
        // Another request may have created it while we waited for the lock
        if let Some(ref session) = *cache {
            return Ok(session.clone());
        }

        let session = self.create_session().await?;
        *cache = Some(session.clone());
        Ok(session)
    }

    /// Tile URL template of the cached (or freshly created) session
    pub async fn tile_url_template(&self) -> Result<String, TileSessionError> {
        self.get_session().await.map(|s| s.url_template)
    }

    async fn create_session(&self) -> Result<TileSession, TileSessionError> {
        let url = format!("{}/v1/createSession", self.config.tile_base_url);
        let payload = CreateSessionRequest {
            map_type: self.config.map_type.clone(),
            language: self.config.language.clone(),
            region: self.config.region.clone(),
        };

        tracing::debug!(
            "Creating tile session at {} (mapType={}, language={}, region={})",
            url,
            payload.map_type,
            payload.language,
            payload.region
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| TileSessionError::Request(e.to_string()))?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Tile session request failed: HTTP {} - {}", status, body);
            return Err(TileSessionError::Rejected(body));
        }

        let session: CreateSessionResponse = response
            .json()
            .await
            .map_err(|e| TileSessionError::Parse(e.to_string()))?;

        tracing::info!(
            "Created tile session (expiry={}, tileWidth={:?}, format={:?})",
            session.expiry.as_deref().unwrap_or("-"),
            session.tile_width,
            session.image_format
        );

        Ok(TileSession {
            url_template: self.build_url_template(&session.session),
        })
    }

    /// `{base}/v1/2dtiles/{z}/{x}/{y}?session=<token>&key=<api key>`
    pub fn build_url_template(&self, token: &str) -> String {
        format!(
            "{}/v1/2dtiles/{{z}}/{{x}}/{{y}}?session={}&key={}",
            self.config.tile_base_url, token, self.config.api_key
        )
    }
}
