//! 预导入模块，方便使用

pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::course_modules::{
    ActiveModel as CourseModuleActiveModel, Entity as CourseModules,
    Model as CourseModuleModel,
};
pub use super::resources::{
    ActiveModel as ResourceActiveModel, Entity as Resources,
    Model as ResourceModel,
};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments,
    Model as EnrollmentModel,
};
pub use super::evaluations::{
    ActiveModel as EvaluationActiveModel, Entity as Evaluations,
    Model as EvaluationModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions,
    Model as SubmissionModel,
};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications,
    Model as NotificationModel,
};
pub use super::notification_recipients::{
    ActiveModel as NotificationRecipientActiveModel, Entity as NotificationRecipients,
    Model as NotificationRecipientModel,
};
