use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

/// 等待 Ctrl+C，随后取消根令牌，使进行中的操作在下一个挂起点退出
pub async fn listen_for_shutdown(shutdown: CancellationToken) {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    warn!("Shutdown signal received, initiating graceful shutdown...");
    shutdown.cancel();
}
