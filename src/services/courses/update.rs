use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use super::CourseService;
use crate::errors::Result;
use crate::models::courses::{entities::Course, requests::UpdateCourseRequest};
use crate::services::guards::require_existing;
use crate::storage::UnitOfWork;
use crate::utils::time;
use crate::utils::validate::require_text;

pub async fn update_course(
    service: &CourseService,
    course_id: Uuid,
    request: UpdateCourseRequest,
    cancel: &CancellationToken,
) -> Result<Course> {
    let mut course = require_existing(&service.courses, course_id, "Course", cancel).await?;

    if let Some(title) = request.title.as_set() {
        require_text(title, "Title")?;
    }
    if let Some(code) = request.code.as_set() {
        require_text(code, "Code")?;
    }

    request.title.map(|v| v.trim().to_string()).apply_to(&mut course.title);
    request.code.map(|v| v.trim().to_string()).apply_to(&mut course.code);
    request.description.apply_to(&mut course.description);
    request.is_published.apply_to(&mut course.is_published);
    course.updated_at = Some(time::now());

    let mut uow = UnitOfWork::begin(service.storage());
    service.courses.stage_update(&mut uow, course.clone());
    uow.commit(cancel).await?;

    info!("Course {} updated", course.id);
    Ok(course)
}
