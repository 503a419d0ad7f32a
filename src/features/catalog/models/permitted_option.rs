use serde::Deserialize;

/// One row of the permitted development option list.
///
/// Column names follow the CSV header shipped with the data set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PermittedOption {
    /// Display name, unique across the list
    #[serde(rename = "Permitted Development Options")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// Image file name under the images directory
    #[serde(rename = "thumbnail")]
    pub thumbnail: String,
    /// Boundary file name under the KML directory
    #[serde(rename = "kml")]
    pub boundary_file: String,
}

impl PermittedOption {
    pub fn thumbnail_url(&self) -> String {
        format!("/images/{}", urlencoding::encode(&self.thumbnail))
    }
}
