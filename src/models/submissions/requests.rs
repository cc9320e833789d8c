use serde::Deserialize;
use ts_rs::TS;
use uuid::Uuid;

use super::entities::SubmissionStatus;
use crate::models::common::Patch;

// 提交创建请求；attempt_number 缺省或非正数时自动编号
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct CreateSubmissionRequest {
    pub evaluation_id: Uuid,
    pub student_id: Uuid,
    pub content: String,
    pub file_url: Option<String>,
    pub attempt_number: Option<i32>,
}

// 评分请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeSubmissionRequest {
    #[serde(default)]
    pub score: Patch<Option<f64>>,
    #[serde(default)]
    pub feedback: Patch<Option<String>>,
    #[serde(default)]
    pub status: Patch<SubmissionStatus>,
}

// 内容修改请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSubmissionRequest {
    #[serde(default)]
    pub content: Patch<String>,
    #[serde(default)]
    pub file_url: Patch<Option<String>>,
}
