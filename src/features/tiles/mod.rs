//! Satellite tile sessions (Google Map Tiles API).
//!
//! A session token is created once with a fixed payload and baked into the
//! `2dtiles` URL template together with the API key.

pub mod models;
pub mod services;

pub use services::TileSessionService;
