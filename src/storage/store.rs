use std::marker::PhantomData;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::{RecordQuery, Storage, UnitOfWork};
use crate::errors::{PlatformError, Result};
use crate::models::Lifecycle;
use crate::utils::{run_cancellable, time};

/// 泛型实体存储
///
/// 读取立即访问存储；写入只暂存到调用方传入的工作单元，从不自行提交。
pub struct EntityStore<T: Lifecycle> {
    storage: Arc<dyn Storage>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Lifecycle> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        Self::new(self.storage.clone())
    }
}

impl<T: Lifecycle> EntityStore<T> {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            _marker: PhantomData,
        }
    }

    /// 该实体类别的查询起点
    pub fn query(&self) -> RecordQuery {
        RecordQuery::new(T::KIND)
    }

    pub async fn get_active_by_id(&self, id: Uuid, cancel: &CancellationToken) -> Result<Option<T>> {
        self.find_one(self.query().by_id(id).active(), cancel).await
    }

    pub async fn get_by_id_any_state(
        &self,
        id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Option<T>> {
        self.find_one(self.query().by_id(id), cancel).await
    }

    pub async fn list_all(&self, cancel: &CancellationToken) -> Result<Vec<T>> {
        self.find(self.query(), cancel).await
    }

    pub async fn list_active(&self, cancel: &CancellationToken) -> Result<Vec<T>> {
        self.find(self.query().active(), cancel).await
    }

    pub async fn list_inactive(&self, cancel: &CancellationToken) -> Result<Vec<T>> {
        self.find(self.query().inactive(), cancel).await
    }

    pub async fn find(&self, query: RecordQuery, cancel: &CancellationToken) -> Result<Vec<T>> {
        if query.kind != T::KIND {
            return Err(PlatformError::database_operation(format!(
                "查询类别不匹配: 期望 {}, 实际 {}",
                T::KIND,
                query.kind
            )));
        }

        let records = run_cancellable(cancel, self.storage.fetch(&query)).await?;
        records
            .into_iter()
            .map(|record| {
                let kind = record.kind();
                T::from_record(record).ok_or_else(|| {
                    PlatformError::database_operation(format!(
                        "记录类别不匹配: 期望 {}, 实际 {kind}",
                        T::KIND
                    ))
                })
            })
            .collect()
    }

    pub async fn find_one(
        &self,
        query: RecordQuery,
        cancel: &CancellationToken,
    ) -> Result<Option<T>> {
        Ok(self.find(query.limit(1), cancel).await?.into_iter().next())
    }

    pub async fn count(&self, query: RecordQuery, cancel: &CancellationToken) -> Result<u64> {
        run_cancellable(cancel, self.storage.count(&query)).await
    }

    /// 暂存新实体，下次提交时插入
    pub fn stage(&self, uow: &mut UnitOfWork, entity: T) {
        uow.stage_insert(entity.into_record());
    }

    /// 暂存已有实体的整行更新
    pub fn stage_update(&self, uow: &mut UnitOfWork, entity: T) {
        uow.stage_update(entity.into_record());
    }

    /// 软删除：不存在或已停用时返回 false，不做任何修改
    pub async fn deactivate(
        &self,
        uow: &mut UnitOfWork,
        id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        self.transition(uow, id, false, cancel).await
    }

    /// 重新激活：不存在或已激活时返回 false，不做任何修改
    pub async fn reactivate(
        &self,
        uow: &mut UnitOfWork,
        id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        self.transition(uow, id, true, cancel).await
    }

    async fn transition(
        &self,
        uow: &mut UnitOfWork,
        id: Uuid,
        target: bool,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        let Some(mut entity) = self.get_by_id_any_state(id, cancel).await? else {
            return Ok(false);
        };
        if entity.is_active() == target {
            return Ok(false);
        }

        entity.set_active(target);
        entity.touch(time::now());
        self.stage_update(uow, entity);
        Ok(true)
    }
}
