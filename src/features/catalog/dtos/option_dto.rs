use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::catalog::models::PermittedOption;

/// Response DTO for a permitted development option
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionResponseDto {
    pub name: String,
    pub description: String,
    pub thumbnail_url: String,
    pub boundary_file: String,
}

impl From<&PermittedOption> for OptionResponseDto {
    fn from(option: &PermittedOption) -> Self {
        Self {
            name: option.name.clone(),
            description: option.description.clone(),
            thumbnail_url: option.thumbnail_url(),
            boundary_file: option.boundary_file.clone(),
        }
    }
}
