mod planner_handler;

pub use planner_handler::*;
