//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod select;
mod write;

use std::time::Duration;

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{PlatformError, Result};
use crate::storage::{EntityKind, Record, RecordQuery, StagedWrite, Storage};

const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 按数据库配置连接并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| PlatformError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    ///
    /// 内存库只存在于单个连接中，因此固定为一个永不回收的连接。
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url == SQLITE_MEMORY_URL;

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PlatformError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory")
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");
        }

        let mut pool = SqlitePoolOptions::new()
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout));

        pool = if in_memory {
            pool.max_connections(1).idle_timeout(None).max_lifetime(None)
        } else {
            pool.max_connections(config.pool_size)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool
            .connect_with(opt)
            .await
            .map_err(|e| PlatformError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| PlatformError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url == ":memory:" || url == SQLITE_MEMORY_URL {
            Ok(SQLITE_MEMORY_URL.to_string())
        } else if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PlatformError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, sqlite::memory:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// 按记录类别分派到对应的 SeaORM 实体
macro_rules! dispatch_kind {
    ($kind:expr, $method:ident, $self:ident, $($arg:expr),*) => {{
        use crate::entity;
        match $kind {
            EntityKind::User => $self.$method::<entity::users::Entity>($($arg),*).await,
            EntityKind::Course => $self.$method::<entity::courses::Entity>($($arg),*).await,
            EntityKind::CourseModule => {
                $self.$method::<entity::course_modules::Entity>($($arg),*).await
            }
            EntityKind::Resource => $self.$method::<entity::resources::Entity>($($arg),*).await,
            EntityKind::Enrollment => {
                $self.$method::<entity::enrollments::Entity>($($arg),*).await
            }
            EntityKind::Evaluation => {
                $self.$method::<entity::evaluations::Entity>($($arg),*).await
            }
            EntityKind::Submission => {
                $self.$method::<entity::submissions::Entity>($($arg),*).await
            }
            EntityKind::Notification => {
                $self.$method::<entity::notifications::Entity>($($arg),*).await
            }
            EntityKind::NotificationRecipient => {
                $self
                    .$method::<entity::notification_recipients::Entity>($($arg),*)
                    .await
            }
        }
    }};
}

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn fetch(&self, query: &RecordQuery) -> Result<Vec<Record>> {
        dispatch_kind!(query.kind, fetch_records_impl, self, query)
    }

    async fn count(&self, query: &RecordQuery) -> Result<u64> {
        dispatch_kind!(query.kind, count_records_impl, self, query)
    }

    async fn apply(&self, writes: Vec<StagedWrite>, cancel: &CancellationToken) -> Result<u64> {
        self.apply_writes_impl(writes, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_urls_are_normalised() {
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            SQLITE_MEMORY_URL
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            SQLITE_MEMORY_URL
        );
    }

    #[test]
    fn test_file_path_becomes_sqlite_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("learnhub.db").unwrap(),
            "sqlite://learnhub.db?mode=rwc"
        );
    }

    #[test]
    fn test_unknown_scheme_is_rejected() {
        let err = SeaOrmStorage::build_database_url("redis://localhost").unwrap_err();
        assert_eq!(err.code(), "E007");
    }
}
