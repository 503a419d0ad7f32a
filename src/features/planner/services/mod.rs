mod planner_service;
mod scene_renderer;
mod session_store;

pub use planner_service::{PageSettings, PlannerService};
pub use session_store::SessionStore;
