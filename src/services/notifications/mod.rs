//! 通知编排
//!
//! 通知与其全部接收人在同一个工作单元中写入；接收人的投递与已读状态独立变更。

pub mod create;
pub mod recipients;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::guards::require_existing;
use super::lifecycle::{Transition, transition_and_commit};
use crate::errors::Result;
use crate::models::notifications::{
    entities::{Notification, NotificationDetail, NotificationRecipient},
    requests::CreateNotificationRequest,
};
use crate::models::users::entities::User;
use crate::storage::{EntityStore, Field, Storage};

pub struct NotificationService {
    storage: Arc<dyn Storage>,
    notifications: EntityStore<Notification>,
    recipients: EntityStore<NotificationRecipient>,
    users: EntityStore<User>,
}

impl NotificationService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            notifications: EntityStore::new(storage.clone()),
            recipients: EntityStore::new(storage.clone()),
            users: EntityStore::new(storage.clone()),
            storage,
        }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    /// 创建通知并扇出到接收人
    pub async fn create_notification(
        &self,
        request: CreateNotificationRequest,
        cancel: &CancellationToken,
    ) -> Result<NotificationDetail> {
        create::create_notification(self, request, cancel).await
    }

    /// 标记已投递；已投递时返回 false
    pub async fn mark_delivered(
        &self,
        recipient_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        recipients::mark_delivered(self, recipient_id, cancel).await
    }

    /// 标记已读；已读时返回 false，不修改投递状态
    pub async fn mark_read(&self, recipient_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        recipients::mark_read(self, recipient_id, cancel).await
    }

    pub async fn count_unread(&self, user_id: Uuid, cancel: &CancellationToken) -> Result<u64> {
        recipients::count_unread(self, user_id, cancel).await
    }

    /// 待投递接收人，按创建时间升序，最多 max_items 条
    pub async fn list_pending(
        &self,
        max_items: u64,
        cancel: &CancellationToken,
    ) -> Result<Vec<NotificationRecipient>> {
        recipients::list_pending(self, max_items, cancel).await
    }

    /// 用户的接收记录，最新在前
    pub async fn recipients_for_user(
        &self,
        user_id: Uuid,
        only_unread: bool,
        cancel: &CancellationToken,
    ) -> Result<Vec<NotificationRecipient>> {
        recipients::recipients_for_user(self, user_id, only_unread, cancel).await
    }

    /// 通知及其激活的接收人
    pub async fn get_with_recipients(
        &self,
        notification_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<NotificationDetail> {
        let notification =
            require_existing(&self.notifications, notification_id, "Notification", cancel).await?;
        let recipients = self
            .recipients
            .find(
                self.recipients
                    .query()
                    .active()
                    .filter(Field::NotificationId, notification.id),
                cancel,
            )
            .await?;
        Ok(NotificationDetail {
            notification,
            recipients,
        })
    }

    pub async fn deactivate(
        &self,
        notification_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        transition_and_commit::<Notification>(
            self.storage(),
            notification_id,
            Transition::Deactivate,
            cancel,
        )
        .await
    }

    pub async fn reactivate(
        &self,
        notification_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        transition_and_commit::<Notification>(
            self.storage(),
            notification_id,
            Transition::Reactivate,
            cancel,
        )
        .await
    }
}
