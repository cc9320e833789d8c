//! 关联实体解析

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::errors::{PlatformError, Result};
use crate::models::Lifecycle;
use crate::storage::EntityStore;

/// 按 id 解析实体（任意状态），不存在时返回 `NotFound`
pub(crate) async fn require_existing<T: Lifecycle>(
    store: &EntityStore<T>,
    id: Uuid,
    label: &str,
    cancel: &CancellationToken,
) -> Result<T> {
    store
        .get_by_id_any_state(id, cancel)
        .await?
        .ok_or_else(|| PlatformError::not_found(format!("{label} not found")))
}

/// 按 id 解析实体，不存在返回 `NotFound`，已停用返回 `InvalidState`
pub(crate) async fn require_active<T: Lifecycle>(
    store: &EntityStore<T>,
    id: Uuid,
    label: &str,
    cancel: &CancellationToken,
) -> Result<T> {
    let entity = require_existing(store, id, label, cancel).await?;
    if !entity.is_active() {
        return Err(PlatformError::invalid_state(format!("{label} is inactive")));
    }
    Ok(entity)
}
