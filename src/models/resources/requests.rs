use serde::Deserialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::models::common::Patch;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "resource.ts")]
pub struct CreateResourceRequest {
    pub resource_type: String,
    pub name: String,
    pub url: String,
    pub uploaded_by_id: Uuid,
    pub course_id: Option<Uuid>,
    pub module_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateResourceRequest {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub url: Patch<String>,
}
