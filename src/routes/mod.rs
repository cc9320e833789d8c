pub mod course_modules;
pub mod courses;
pub mod enrollments;
pub mod evaluations;
pub mod lifecycle;
pub mod notifications;
pub mod resources;
pub mod response;
pub mod submissions;
pub mod users;

pub use course_modules::configure_module_routes;
pub use courses::configure_course_routes;
pub use enrollments::configure_enrollment_routes;
pub use evaluations::configure_evaluation_routes;
pub use notifications::configure_notification_routes;
pub use resources::configure_resource_routes;
pub use submissions::configure_submission_routes;
pub use users::configure_user_routes;
