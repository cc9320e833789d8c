//! 业务编排层
//!
//! 每个编排器的一次调用对应一个工作单元，最多提交一次。
//! 校验全部在暂存之前完成，暂存之后唯一可能的失败来自提交本身。

pub mod course_modules;
pub mod courses;
pub mod enrollments;
pub mod evaluations;
pub(crate) mod guards;
pub mod lifecycle;
pub mod notifications;
pub mod queries;
pub mod resources;
pub mod submissions;
pub mod users;

pub use course_modules::CourseModuleService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use evaluations::EvaluationService;
pub use lifecycle::{LifecycleManager, Transition};
pub use notifications::NotificationService;
pub use queries::QueryFacade;
pub use resources::ResourceService;
pub use submissions::SubmissionService;
pub use users::UserService;
