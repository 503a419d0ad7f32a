//! Address search planner.
//!
//! Each browser session holds a [`models::ViewState`] snapshot. Every
//! interaction feeds one [`models::ViewEvent`] through the reducer, stores the
//! new snapshot and re-renders the whole scene from it.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::ViewRules;
pub use services::{PageSettings, PlannerService, SessionStore};
