use std::path::Path;

use roxmltree::Document;
use thiserror::Error;

use crate::features::boundaries::models::BoundaryPolygon;

/// Namespace of KML 2.2 documents
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

#[derive(Debug, Error)]
pub enum KmlError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("no kml:coordinates element found")]
    MissingCoordinates,

    #[error("kml:coordinates element is empty")]
    EmptyCoordinates,

    #[error("coordinate {index} is not a lon,lat,altitude triple: '{value}'")]
    MalformedTriple { index: usize, value: String },
}

/// Extract the first `kml:coordinates` list of a KML document.
///
/// Each whitespace-separated token must be `lon,lat,altitude`. Altitude is
/// dropped and the result keeps input order. Ring closure, winding and
/// coordinate bounds are not checked.
pub fn parse_kml(kml: &str) -> Result<BoundaryPolygon, KmlError> {
    let document = Document::parse(kml)?;

    let node = document
        .descendants()
        .find(|n| n.has_tag_name((KML_NAMESPACE, "coordinates")))
        .ok_or(KmlError::MissingCoordinates)?;

    // Comments may split the list into several text nodes
    let content: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    let text = content.trim();
    if text.is_empty() {
        return Err(KmlError::EmptyCoordinates);
    }

    let mut polygon = BoundaryPolygon::default();
    for (index, token) in text.split_whitespace().enumerate() {
        let (lon, lat) = parse_triple(token).ok_or_else(|| KmlError::MalformedTriple {
            index,
            value: token.to_string(),
        })?;
        polygon.lats.push(lat);
        polygon.lons.push(lon);
    }

    Ok(polygon)
}

/// Read and parse a KML file from disk
pub fn parse_kml_file(path: &Path) -> Result<BoundaryPolygon, KmlError> {
    let content = std::fs::read_to_string(path).map_err(|source| KmlError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_kml(&content)
}

fn parse_triple(token: &str) -> Option<(f64, f64)> {
    let mut parts = token.split(',');
    let lon = parts.next()?.parse::<f64>().ok()?;
    let lat = parts.next()?.parse::<f64>().ok()?;
    parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((lon, lat))
}
