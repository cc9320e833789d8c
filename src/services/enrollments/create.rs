use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use super::EnrollmentService;
use crate::errors::{PlatformError, Result};
use crate::models::enrollments::{
    entities::{Enrollment, EnrollmentStatus},
    requests::CreateEnrollmentRequest,
};
use crate::services::guards::require_active;
use crate::storage::UnitOfWork;
use crate::utils::time;

pub async fn create_enrollment(
    service: &EnrollmentService,
    request: CreateEnrollmentRequest,
    cancel: &CancellationToken,
) -> Result<Enrollment> {
    let user = require_active(&service.users, request.user_id, "User", cancel).await?;
    let course = require_active(&service.courses, request.course_id, "Course", cancel).await?;

    if service.find_active(course.id, user.id, cancel).await?.is_some() {
        warn!("User {} already enrolled in course {}", user.id, course.id);
        return Err(PlatformError::conflict("User already enrolled in this course"));
    }

    let now = time::now();
    let enrollment = Enrollment {
        id: Uuid::new_v4(),
        course_id: course.id,
        user_id: user.id,
        status: EnrollmentStatus::Active,
        enrolled_at: now,
        unenrolled_at: None,
        is_active: true,
        created_at: now,
        updated_at: None,
    };

    let mut uow = UnitOfWork::begin(service.storage());
    service.enrollments.stage(&mut uow, enrollment.clone());
    uow.commit(cancel).await?;

    info!("User {} enrolled in course {}", user.id, course.id);
    Ok(enrollment)
}
