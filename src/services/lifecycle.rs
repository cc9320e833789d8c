//! 生命周期管理
//!
//! 对任意实体执行软删除与重新激活。管理器只负责暂存，提交由调用方决定。

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::Result;
use crate::models::Lifecycle;
use crate::storage::{EntityStore, Storage, UnitOfWork};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Deactivate,
    Reactivate,
}

pub struct LifecycleManager<T: Lifecycle> {
    store: EntityStore<T>,
}

impl<T: Lifecycle> LifecycleManager<T> {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            store: EntityStore::new(storage),
        }
    }

    /// 停用实体；不存在或已停用时返回 false
    pub async fn deactivate(
        &self,
        uow: &mut UnitOfWork,
        id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        self.store.deactivate(uow, id, cancel).await
    }

    /// 重新激活实体；不存在或已激活时返回 false
    pub async fn reactivate(
        &self,
        uow: &mut UnitOfWork,
        id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        self.store.reactivate(uow, id, cancel).await
    }

    pub async fn apply(
        &self,
        uow: &mut UnitOfWork,
        id: Uuid,
        transition: Transition,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        match transition {
            Transition::Deactivate => self.deactivate(uow, id, cancel).await,
            Transition::Reactivate => self.reactivate(uow, id, cancel).await,
        }
    }
}

/// 在独立工作单元中执行一次状态切换，仅在发生切换时提交
pub async fn transition_and_commit<T: Lifecycle>(
    storage: Arc<dyn Storage>,
    id: Uuid,
    transition: Transition,
    cancel: &CancellationToken,
) -> Result<bool> {
    let manager = LifecycleManager::<T>::new(storage.clone());
    let mut uow = UnitOfWork::begin(storage);

    let changed = manager.apply(&mut uow, id, transition, cancel).await?;
    if changed {
        uow.commit(cancel).await?;
        info!("{:?} applied to {} {}", transition, T::KIND, id);
    } else {
        debug!("{:?} on {} {} was a no-op", transition, T::KIND, id);
    }
    Ok(changed)
}
