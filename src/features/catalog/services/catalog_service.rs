use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::core::error::{AppError, Result};
use crate::features::catalog::models::PermittedOption;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read option list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid option list row: {0}")]
    Csv(#[from] csv::Error),

    #[error("Duplicate option name: {0}")]
    DuplicateName(String),
}

/// Immutable list of permitted development options, loaded once at startup
#[derive(Debug)]
pub struct CatalogService {
    options: Vec<PermittedOption>,
}

impl CatalogService {
    /// Load the option list from a CSV file
    pub fn from_csv_path(path: &Path) -> std::result::Result<Self, CatalogError> {
        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let service = Self::from_reader(file)?;
        tracing::debug!(
            "Loaded {} permitted development options from {}",
            service.options.len(),
            path.display()
        );
        Ok(service)
    }

    /// Parse the option list from any CSV source, keeping row order
    pub fn from_reader<R: Read>(reader: R) -> std::result::Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for row in csv_reader.deserialize::<PermittedOption>() {
            let option = row?;
            if !seen.insert(option.name.clone()) {
                return Err(CatalogError::DuplicateName(option.name));
            }
            options.push(option);
        }

        Ok(Self { options })
    }

    /// All options in list order
    pub fn list(&self) -> &[PermittedOption] {
        &self.options
    }

    pub fn find(&self, name: &str) -> Option<&PermittedOption> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Look up an option by name, failing with 404 when absent
    pub fn get(&self, name: &str) -> Result<&PermittedOption> {
        self.find(name)
            .ok_or_else(|| AppError::NotFound(format!("Option '{}' not found", name)))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Permitted Development Options,Description,thumbnail,kml
Rear Extension,Single storey rear extension up to 3m,rear.png,rear.kml
Loft Conversion,\"Dormer loft, up to 40 cubic metres\",loft.png,loft.kml
";

    #[test]
    fn test_from_reader_keeps_row_order() {
        let catalog = CatalogService::from_reader(CSV.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list()[0].name, "Rear Extension");
        assert_eq!(catalog.list()[1].name, "Loft Conversion");
        assert_eq!(
            catalog.list()[1].description,
            "Dormer loft, up to 40 cubic metres"
        );
        assert_eq!(catalog.list()[1].boundary_file, "loft.kml");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let csv = format!("{}Rear Extension,Again,rear2.png,rear2.kml\n", CSV);
        let result = CatalogService::from_reader(csv.as_bytes());

        assert!(matches!(result, Err(CatalogError::DuplicateName(name)) if name == "Rear Extension"));
    }

    #[test]
    fn test_missing_column_rejected() {
        let csv = "Permitted Development Options,Description\nRear Extension,Something\n";
        let result = CatalogService::from_reader(csv.as_bytes());

        assert!(matches!(result, Err(CatalogError::Csv(_))));
    }

    #[test]
    fn test_get_unknown_option() {
        let catalog = CatalogService::from_reader(CSV.as_bytes()).unwrap();

        assert!(catalog.get("Rear Extension").is_ok());
        assert!(matches!(
            catalog.get("Basement"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_from_csv_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CatalogService::from_csv_path(&dir.path().join("missing.csv"));

        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_thumbnail_url_is_encoded() {
        let catalog = CatalogService::from_reader(
            "Permitted Development Options,Description,thumbnail,kml\nA,B,side wall.png,a.kml\n"
                .as_bytes(),
        )
        .unwrap();

        assert_eq!(catalog.list()[0].thumbnail_url(), "/images/side%20wall.png");
    }
}
