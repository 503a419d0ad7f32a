use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub maps: MapsConfig,
    pub geocoder: GeocoderConfig,
    pub catalog: CatalogConfig,
    pub session: SessionConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub page_title: String,
    pub logo_url: String,
}

/// Map Tiles API credentials and the fixed session payload
#[derive(Debug, Clone)]
pub struct MapsConfig {
    pub api_key: String,
    pub tile_base_url: String,
    pub map_type: String,
    pub language: String,
    pub region: String,
    pub default_zoom: f64,
    /// Keep the map centered on the first successful search
    pub lock_center: bool,
}

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Comma-separated ISO 3166-1 alpha-2 codes passed to Nominatim
    pub country_codes: Option<String>,
}

/// Locations of the static option list and its assets
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub options_csv: PathBuf,
    pub kml_dir: PathBuf,
    pub images_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub idle_ttl: Duration,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            maps: MapsConfig::from_env()?,
            geocoder: GeocoderConfig::from_env()?,
            catalog: CatalogConfig::from_env()?,
            session: SessionConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_PAGE_TITLE: &'static str = "Permitted Development Search";
    const DEFAULT_LOGO_URL: &'static str = "https://www.shift-construction.com/wp-content/uploads/2024/05/shift-blue-logo-white-text-120x72.png";

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let page_title =
            env::var("PAGE_TITLE").unwrap_or_else(|_| Self::DEFAULT_PAGE_TITLE.to_string());
        let logo_url = env::var("LOGO_URL").unwrap_or_else(|_| Self::DEFAULT_LOGO_URL.to_string());

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            page_title,
            logo_url,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl MapsConfig {
    const DEFAULT_TILE_BASE_URL: &'static str = "https://tile.googleapis.com";
    const DEFAULT_ZOOM: f64 = 17.5;

    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("GOOGLE_MAPS_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "GOOGLE_MAPS_API_KEY environment variable is required".to_string())?;

        let tile_base_url = env::var("TILE_API_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_TILE_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let map_type = env::var("TILE_MAP_TYPE").unwrap_or_else(|_| "satellite".to_string());
        let language = env::var("TILE_LANGUAGE").unwrap_or_else(|_| "en-US".to_string());
        let region = env::var("TILE_REGION").unwrap_or_else(|_| "US".to_string());

        let default_zoom = env::var("MAP_DEFAULT_ZOOM")
            .unwrap_or_else(|_| Self::DEFAULT_ZOOM.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_DEFAULT_ZOOM must be a valid number".to_string())?;

        let lock_center = env::var("MAP_LOCK_CENTER")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .map_err(|_| "MAP_LOCK_CENTER must be true or false".to_string())?;

        Ok(Self {
            api_key,
            tile_base_url,
            map_type,
            language,
            region,
            default_zoom,
            lock_center,
        })
    }
}

impl GeocoderConfig {
    const DEFAULT_BASE_URL: &'static str = "https://nominatim.openstreetmap.org";
    const DEFAULT_USER_AGENT: &'static str = "PermittedDevSearch/0.1 (address-lookup)";

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("GEOCODER_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let user_agent = env::var("GEOCODER_USER_AGENT")
            .unwrap_or_else(|_| Self::DEFAULT_USER_AGENT.to_string());
        let country_codes = env::var("GEOCODER_COUNTRY_CODES")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Ok(Self {
            base_url,
            user_agent,
            country_codes,
        })
    }
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self, String> {
        let options_csv = env::var("OPTIONS_CSV").unwrap_or_else(|_| "data/permitted.csv".into());
        let kml_dir = env::var("KML_DIR").unwrap_or_else(|_| "data/kml".into());
        let images_dir = env::var("IMAGES_DIR").unwrap_or_else(|_| "data/images".into());

        Ok(Self {
            options_csv: PathBuf::from(options_csv),
            kml_dir: PathBuf::from(kml_dir),
            images_dir: PathBuf::from(images_dir),
        })
    }
}

impl SessionConfig {
    const DEFAULT_IDLE_TTL_SECS: u64 = 3600; // 1 hour

    pub fn from_env() -> Result<Self, String> {
        let idle_ttl_secs = env::var("SESSION_IDLE_TTL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TTL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "SESSION_IDLE_TTL_SECS must be a valid number".to_string())?;

        Ok(Self {
            idle_ttl: Duration::from_secs(idle_ttl_secs),
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE")
            .unwrap_or_else(|_| "Permitted Development Search API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Address search with permitted development overlays".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["*".to_string()],
            page_title: String::new(),
            logo_url: String::new(),
        };
        assert_eq!(app.server_address(), "0.0.0.0:8080");
    }
}
