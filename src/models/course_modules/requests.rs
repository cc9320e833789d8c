use serde::Deserialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::models::common::Patch;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "course_module.ts")]
pub struct CreateCourseModuleRequest {
    pub course_id: Uuid,
    pub title: String,
    pub order_index: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseModuleRequest {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub order_index: Patch<i32>,
    #[serde(default)]
    pub description: Patch<Option<String>>,
}
