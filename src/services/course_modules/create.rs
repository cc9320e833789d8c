use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use super::CourseModuleService;
use crate::errors::Result;
use crate::models::course_modules::{
    entities::CourseModule, requests::CreateCourseModuleRequest,
};
use crate::services::guards::require_active;
use crate::storage::UnitOfWork;
use crate::utils::time;
use crate::utils::validate::require_text;

pub async fn create_module(
    service: &CourseModuleService,
    request: CreateCourseModuleRequest,
    cancel: &CancellationToken,
) -> Result<CourseModule> {
    require_text(&request.title, "Title")?;

    let course = require_active(&service.courses, request.course_id, "Course", cancel).await?;
    service
        .ensure_order_index_free(course.id, request.order_index, None, cancel)
        .await?;

    let module = CourseModule {
        id: Uuid::new_v4(),
        course_id: course.id,
        title: request.title.trim().to_string(),
        order_index: request.order_index,
        description: request.description,
        is_active: true,
        created_at: time::now(),
        updated_at: None,
    };

    let mut uow = UnitOfWork::begin(service.storage());
    service.modules.stage(&mut uow, module.clone());
    uow.commit(cancel).await?;

    info!(
        "Module {} created in course {} at position {}",
        module.id, module.course_id, module.order_index
    );
    Ok(module)
}
