//! Permitted development option catalog.
//!
//! The option list is a static CSV (`Permitted Development Options`,
//! `Description`, `thumbnail`, `kml`) read once at startup. Names are unique
//! and serve as the option key everywhere else.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::PermittedOption;
pub use services::{CatalogError, CatalogService};
