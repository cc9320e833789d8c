//! 数据存储层
//!
//! - `Storage`：按类别读写记录的对象安全接口
//! - `EntityStore<T>`：面向业务实体的泛型存储（状态分区查询、延迟写入、软删除）
//! - `UnitOfWork`：一次业务操作的写入批次，单次原子提交

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::errors::Result;

pub mod query;
pub mod record;
pub mod sea_orm_storage;
mod store;
mod unit_of_work;

pub use query::{Field, FieldValue, RecordQuery, SortDirection, SortKey, StateScope};
pub use record::{EntityKind, Record};
pub use store::EntityStore;
pub use unit_of_work::{StagedWrite, UnitOfWork};

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 按查询描述读取记录
    async fn fetch(&self, query: &RecordQuery) -> Result<Vec<Record>>;
    /// 按查询描述计数（忽略 limit 以外的分页语义）
    async fn count(&self, query: &RecordQuery) -> Result<u64>;
    /// 在单个事务中按顺序执行全部写入，返回受影响行数
    ///
    /// 任一写入被拒绝时整体回滚并返回 `PersistenceConflict`；
    /// 在写入完成前观察到取消时回滚并返回 `Cancelled`。
    async fn apply(&self, writes: Vec<StagedWrite>, cancel: &CancellationToken) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
