use serde::Deserialize;

use crate::core::config::GeocoderConfig;
use crate::core::error::{AppError, Result};
use crate::features::geocoding::models::ResolvedLocation;

/// Nominatim API response structure
#[derive(Debug, Deserialize)]
pub struct NominatimResponse {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

impl NominatimResponse {
    fn into_location(self) -> Result<ResolvedLocation> {
        let latitude = self.lat.parse::<f64>().map_err(|e| {
            AppError::ExternalServiceError(format!("Invalid latitude '{}': {}", self.lat, e))
        })?;
        let longitude = self.lon.parse::<f64>().map_err(|e| {
            AppError::ExternalServiceError(format!("Invalid longitude '{}': {}", self.lon, e))
        })?;

        Ok(ResolvedLocation {
            latitude,
            longitude,
            address: self.display_name,
        })
    }
}

/// Service for geocoding addresses using Nominatim
pub struct GeocodingService {
    client: reqwest::Client,
    base_url: String,
    country_codes: Option<String>,
}

impl GeocodingService {
    pub fn new(config: &GeocoderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country_codes: config.country_codes.clone(),
        })
    }

    /// Geocode a free-text address, returning the first match only.
    ///
    /// `Ok(None)` means the geocoder had no match (or answered with a
    /// non-success status).
    pub async fn geocode(&self, address: &str) -> Result<Option<ResolvedLocation>> {
        let mut url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(address)
        );
        if let Some(codes) = &self.country_codes {
            url.push_str(&format!("&countrycodes={}", urlencoding::encode(codes)));
        }

        tracing::debug!("Geocoding (free-form): {} -> {}", address, url);

        match self.execute_request(&url).await? {
            Some(response) => response.into_location().map(Some),
            None => Ok(None),
        }
    }

    /// Execute HTTP request to Nominatim and parse response
    async fn execute_request(&self, url: &str) -> Result<Option<NominatimResponse>> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Nominatim request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Nominatim request failed: {}", e))
        })?;

        if !response.status().is_success() {
            tracing::warn!("Nominatim returned status: {}", response.status());
            return Ok(None);
        }

        let results: Vec<NominatimResponse> = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Nominatim response: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to parse Nominatim response: {}", e))
        })?;

        Ok(results.into_iter().next())
    }
}
