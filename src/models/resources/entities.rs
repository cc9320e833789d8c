use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// 学习资源实体，可挂在课程或课程模块下
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "resource.ts")]
pub struct Resource {
    pub id: Uuid,
    pub resource_type: String,
    pub name: String,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by_id: Uuid,
    pub course_id: Option<Uuid>,
    pub module_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

crate::impl_lifecycle!(Resource, Resource);
