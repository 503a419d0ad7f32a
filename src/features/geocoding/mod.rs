//! Address geocoding through Nominatim.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::ResolvedLocation;
pub use services::GeocodingService;
