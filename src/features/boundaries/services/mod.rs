mod boundary_service;
mod kml_parser;

pub use boundary_service::BoundaryService;
pub use kml_parser::KmlError;
