use std::path::PathBuf;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::boundaries::models::BoundaryPolygon;
use crate::features::boundaries::services::kml_parser::{parse_kml_file, KmlError};
use crate::features::catalog::{CatalogService, PermittedOption};

/// Resolves option boundary files and parses them on demand.
///
/// Files are re-read on every call; nothing is cached.
pub struct BoundaryService {
    kml_dir: PathBuf,
    catalog: Arc<CatalogService>,
}

impl BoundaryService {
    pub fn new(kml_dir: impl Into<PathBuf>, catalog: Arc<CatalogService>) -> Self {
        Self {
            kml_dir: kml_dir.into(),
            catalog,
        }
    }

    /// Parse the boundary of an option record
    pub fn load(&self, option: &PermittedOption) -> std::result::Result<BoundaryPolygon, KmlError> {
        let path = self.kml_dir.join(&option.boundary_file);
        tracing::debug!(
            "Parsing boundary for '{}' from {}",
            option.name,
            path.display()
        );
        let polygon = parse_kml_file(&path)?;
        tracing::debug!("Boundary '{}' has {} vertices", option.name, polygon.len());
        Ok(polygon)
    }

    /// Parse the boundary of the option with the given name
    pub fn load_by_name(&self, name: &str) -> Result<(PermittedOption, BoundaryPolygon)> {
        let option = self.catalog.get(name)?.clone();
        let polygon = self.load(&option)?;
        Ok((option, polygon))
    }
}
