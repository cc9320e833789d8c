use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::course_modules::entities::CourseModule;
use crate::models::evaluations::entities::Evaluation;
use crate::models::resources::entities::Resource;

// 课程实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub code: String,
    pub description: Option<String>,
    pub is_published: bool,
    pub instructor_id: Uuid,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

crate::impl_lifecycle!(Course, Course);

/// 课程及其下属内容（模块按 order_index 升序）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CourseWithContent {
    pub course: Course,
    pub modules: Vec<CourseModule>,
    pub resources: Vec<Resource>,
    pub evaluations: Vec<Evaluation>,
}
