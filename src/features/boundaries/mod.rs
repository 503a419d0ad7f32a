//! Option boundary polygons.
//!
//! Each permitted development option points at a KML 2.2 file holding a
//! single `coordinates` list of `lon,lat,altitude` triples.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::BoundaryPolygon;
pub use services::{BoundaryService, KmlError};
