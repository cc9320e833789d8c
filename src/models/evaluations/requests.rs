use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::models::common::Patch;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "evaluation.ts")]
pub struct CreateEvaluationRequest {
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub total_points: f64,
    pub open_at: Option<DateTime<Utc>>,
    pub close_at: Option<DateTime<Utc>>,
    pub time_limit_minutes: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvaluationRequest {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<Option<String>>,
    #[serde(default)]
    pub total_points: Patch<f64>,
    #[serde(default)]
    pub open_at: Patch<Option<DateTime<Utc>>>,
    #[serde(default)]
    pub close_at: Patch<Option<DateTime<Utc>>>,
    #[serde(default)]
    pub time_limit_minutes: Patch<Option<i32>>,
}

/// 发布时可同时设置开放窗口；未给出的一端保持原值
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "evaluation.ts")]
pub struct PublishEvaluationRequest {
    pub open_at: Option<DateTime<Utc>>,
    pub close_at: Option<DateTime<Utc>>,
}
