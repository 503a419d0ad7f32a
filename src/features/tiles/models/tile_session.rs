use serde::{Deserialize, Serialize};

/// Body of a `createSession` request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub map_type: String,
    pub language: String,
    pub region: String,
}

/// Response of a `createSession` request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session: String,
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub tile_width: Option<u32>,
    #[serde(default)]
    pub image_format: Option<String>,
}

/// Authenticated tile session, reused for the lifetime of the process
#[derive(Debug, Clone, PartialEq)]
pub struct TileSession {
    /// Raster URL with `{z}`, `{x}` and `{y}` placeholders
    pub url_template: String,
}
