use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use super::ResourceService;
use crate::errors::{PlatformError, Result};
use crate::models::resources::{entities::Resource, requests::CreateResourceRequest};
use crate::services::guards::require_active;
use crate::storage::UnitOfWork;
use crate::utils::time;
use crate::utils::validate::require_text;

pub async fn create_resource(
    service: &ResourceService,
    request: CreateResourceRequest,
    cancel: &CancellationToken,
) -> Result<Resource> {
    require_text(&request.resource_type, "Type")?;
    require_text(&request.name, "Name")?;
    require_text(&request.url, "Url")?;

    let uploader = require_active(&service.users, request.uploaded_by_id, "Uploader", cancel).await?;

    let course = match request.course_id {
        Some(course_id) => Some(require_active(&service.courses, course_id, "Course", cancel).await?),
        None => None,
    };
    let module = match request.module_id {
        Some(module_id) => Some(require_active(&service.modules, module_id, "Module", cancel).await?),
        None => None,
    };

    // 同时指定课程与模块时，模块必须属于该课程
    if let (Some(course), Some(module)) = (&course, &module)
        && module.course_id != course.id
    {
        return Err(PlatformError::invalid_state(
            "Module does not belong to the given course",
        ));
    }

    let now = time::now();
    let resource = Resource {
        id: Uuid::new_v4(),
        resource_type: request.resource_type.trim().to_string(),
        name: request.name.trim().to_string(),
        url: request.url.trim().to_string(),
        uploaded_at: now,
        uploaded_by_id: uploader.id,
        course_id: course.map(|c| c.id),
        module_id: module.map(|m| m.id),
        is_active: true,
        created_at: now,
        updated_at: None,
    };

    let mut uow = UnitOfWork::begin(service.storage());
    service.resources.stage(&mut uow, resource.clone());
    uow.commit(cancel).await?;

    info!("Resource {} uploaded by {}", resource.id, resource.uploaded_by_id);
    Ok(resource)
}
