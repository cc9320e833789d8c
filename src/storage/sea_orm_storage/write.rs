//! 工作单元写入
//!
//! 所有暂存写入在同一个事务中按顺序执行。事务对象在提交前被丢弃时自动回滚。

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, TransactionTrait,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::SeaOrmStorage;
use crate::entity;
use crate::errors::{PlatformError, Result};
use crate::storage::{Record, StagedWrite};
use crate::utils::cancel::ensure_not_cancelled;

// 把业务记录转换为对应的 ActiveModel 后执行 $body
macro_rules! with_active_model {
    ($record:expr, $model:ident => $body:expr) => {
        match $record {
            Record::User(e) => {
                let $model = entity::users::ActiveModel::from(e);
                $body
            }
            Record::Course(e) => {
                let $model = entity::courses::ActiveModel::from(e);
                $body
            }
            Record::CourseModule(e) => {
                let $model = entity::course_modules::ActiveModel::from(e);
                $body
            }
            Record::Resource(e) => {
                let $model = entity::resources::ActiveModel::from(e);
                $body
            }
            Record::Enrollment(e) => {
                let $model = entity::enrollments::ActiveModel::from(e);
                $body
            }
            Record::Evaluation(e) => {
                let $model = entity::evaluations::ActiveModel::from(e);
                $body
            }
            Record::Submission(e) => {
                let $model = entity::submissions::ActiveModel::from(e);
                $body
            }
            Record::Notification(e) => {
                let $model = entity::notifications::ActiveModel::from(e);
                $body
            }
            Record::NotificationRecipient(e) => {
                let $model = entity::notification_recipients::ActiveModel::from(e);
                $body
            }
        }
    };
}

async fn insert_one<A>(txn: &DatabaseTransaction, model: A) -> std::result::Result<u64, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    model.insert(txn).await?;
    Ok(1)
}

async fn update_one<A>(txn: &DatabaseTransaction, model: A) -> std::result::Result<u64, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    model.update(txn).await?;
    Ok(1)
}

async fn apply_one(txn: &DatabaseTransaction, write: StagedWrite) -> std::result::Result<u64, DbErr> {
    match write {
        StagedWrite::Insert(record) => with_active_model!(record, model => insert_one(txn, model).await),
        StagedWrite::Update(record) => with_active_model!(record, model => update_one(txn, model).await),
    }
}

impl SeaOrmStorage {
    pub(super) async fn apply_writes_impl(
        &self,
        writes: Vec<StagedWrite>,
        cancel: &CancellationToken,
    ) -> Result<u64> {
        ensure_not_cancelled(cancel)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PlatformError::persistence_conflict(format!("开启事务失败: {e}")))?;

        let mut affected = 0;
        for write in writes {
            if cancel.is_cancelled() {
                if let Err(e) = txn.rollback().await {
                    warn!("Rollback after cancellation failed: {}", e);
                }
                return Err(PlatformError::cancelled("Commit cancelled before completion"));
            }

            let kind = write.record().kind();
            let id = write.record().id();
            affected += apply_one(&txn, write).await.map_err(|e| {
                warn!("Staged write on {} ({}) rejected: {}", kind, id, e);
                PlatformError::persistence_conflict(format!("写入 {kind} 失败: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| PlatformError::persistence_conflict(format!("提交事务失败: {e}")))?;

        debug!("Transaction committed, {} row(s) affected", affected);
        Ok(affected)
    }
}
