use serde::Deserialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::models::common::Patch;

// 课程创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CreateCourseRequest {
    pub title: String,
    pub code: String,
    pub description: Option<String>,
    pub instructor_id: Uuid,
}

// 课程更新请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub code: Patch<String>,
    #[serde(default)]
    pub description: Patch<Option<String>>,
    #[serde(default)]
    pub is_published: Patch<bool>,
}
