use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use super::CourseService;
use crate::errors::Result;
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};
use crate::services::guards::require_active;
use crate::storage::UnitOfWork;
use crate::utils::time;
use crate::utils::validate::require_text;

pub async fn create_course(
    service: &CourseService,
    request: CreateCourseRequest,
    cancel: &CancellationToken,
) -> Result<Course> {
    require_text(&request.title, "Title")?;
    require_text(&request.code, "Code")?;

    let instructor =
        require_active(&service.users, request.instructor_id, "Instructor", cancel).await?;

    // 新课程默认未发布
    let course = Course {
        id: Uuid::new_v4(),
        title: request.title.trim().to_string(),
        code: request.code.trim().to_string(),
        description: request.description,
        is_published: false,
        instructor_id: instructor.id,
        is_active: true,
        created_at: time::now(),
        updated_at: None,
    };

    let mut uow = UnitOfWork::begin(service.storage());
    service.courses.stage(&mut uow, course.clone());
    uow.commit(cancel).await?;

    info!("Course {} ({}) created by instructor {}", course.id, course.code, instructor.id);
    Ok(course)
}
