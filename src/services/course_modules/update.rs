use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use super::CourseModuleService;
use crate::errors::Result;
use crate::models::course_modules::{
    entities::CourseModule, requests::UpdateCourseModuleRequest,
};
use crate::services::guards::require_existing;
use crate::storage::UnitOfWork;
use crate::utils::time;
use crate::utils::validate::require_text;

pub async fn update_module(
    service: &CourseModuleService,
    module_id: Uuid,
    request: UpdateCourseModuleRequest,
    cancel: &CancellationToken,
) -> Result<CourseModule> {
    let mut module = require_existing(&service.modules, module_id, "Module", cancel).await?;

    if let Some(title) = request.title.as_set() {
        require_text(title, "Title")?;
    }
    if let Some(&order_index) = request.order_index.as_set()
        && order_index != module.order_index
    {
        service
            .ensure_order_index_free(module.course_id, order_index, Some(module.id), cancel)
            .await?;
    }

    request.title.map(|v| v.trim().to_string()).apply_to(&mut module.title);
    request.order_index.apply_to(&mut module.order_index);
    request.description.apply_to(&mut module.description);
    module.updated_at = Some(time::now());

    let mut uow = UnitOfWork::begin(service.storage());
    service.modules.stage_update(&mut uow, module.clone());
    uow.commit(cancel).await?;

    info!("Module {} updated", module.id);
    Ok(module)
}
