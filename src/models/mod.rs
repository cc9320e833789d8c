//! 业务数据模型
//!
//! 每个实体族分为 `entities`（持久化实体）与 `requests`（调用方载荷）。

pub mod common;
pub mod course_modules;
pub mod courses;
pub mod enrollments;
pub mod evaluations;
pub mod notifications;
pub mod resources;
pub mod submissions;
pub mod users;

pub use common::{ApiResponse, ErrorCode, Lifecycle, Patch};

// 应用启动时间
#[derive(Debug, Clone, Copy)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
