use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::models::users::entities::User;
use crate::storage::{EntityStore, Storage};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    /// 根取消令牌，每个请求从它派生子令牌
    pub shutdown: CancellationToken,
}

/// 输出存储中的激活用户数，验证存储可读
async fn report_storage_state(storage: &Arc<dyn Storage>, cancel: &CancellationToken) {
    let users = EntityStore::<User>::new(storage.clone());
    match users.count(users.query().active(), cancel).await {
        Ok(count) => debug!("Storage ready with {} active user(s)", count),
        Err(e) => warn!("Failed to read storage state: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 包括存储连接、迁移和根取消令牌
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    let shutdown = CancellationToken::new();
    report_storage_state(&storage, &shutdown).await;

    Ok(StartupContext { storage, shutdown })
}
