use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::ResourceService;
use crate::errors::Result;
use crate::models::resources::{entities::Resource, requests::UpdateResourceRequest};
use crate::services::guards::require_existing;
use crate::storage::UnitOfWork;
use crate::utils::time;
use crate::utils::validate::require_text;

pub async fn update_resource(
    service: &ResourceService,
    resource_id: Uuid,
    request: UpdateResourceRequest,
    cancel: &CancellationToken,
) -> Result<Resource> {
    let mut resource = require_existing(&service.resources, resource_id, "Resource", cancel).await?;

    if let Some(name) = request.name.as_set() {
        require_text(name, "Name")?;
    }
    if let Some(url) = request.url.as_set() {
        require_text(url, "Url")?;
    }

    request.name.map(|v| v.trim().to_string()).apply_to(&mut resource.name);
    request.url.map(|v| v.trim().to_string()).apply_to(&mut resource.url);
    resource.updated_at = Some(time::now());

    let mut uow = UnitOfWork::begin(service.storage());
    service.resources.stage_update(&mut uow, resource.clone());
    uow.commit(cancel).await?;

    Ok(resource)
}
