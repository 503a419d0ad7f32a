pub mod boundaries;
pub mod catalog;
pub mod geocoding;
pub mod planner;
pub mod tiles;
