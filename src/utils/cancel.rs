//! 取消令牌辅助

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::errors::{PlatformError, Result};

/// 在取消令牌与给定 future 之间竞速
///
/// 令牌先触发时返回 `Cancelled`，future 被丢弃。令牌在调用前已取消时不会轮询 future。
pub async fn run_cancellable<F, T>(cancel: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(PlatformError::cancelled("Operation cancelled")),
        result = fut => result,
    }
}

/// 检查令牌状态，已取消时返回 `Cancelled`
pub fn ensure_not_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(PlatformError::cancelled("Operation cancelled"));
    }
    Ok(())
}
