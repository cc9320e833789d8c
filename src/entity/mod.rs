//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行读写，然后转换为 models 中的业务实体。
//! 时间字段统一存储为毫秒时间戳。

pub mod prelude;

pub mod course_modules;
pub mod courses;
pub mod enrollments;
pub mod evaluations;
pub mod notification_recipients;
pub mod notifications;
pub mod resources;
pub mod submissions;
pub mod users;
