use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use super::NotificationService;
use crate::errors::{PlatformError, Result};
use crate::models::notifications::entities::NotificationRecipient;
use crate::storage::{Field, SortDirection, SortKey, UnitOfWork};
use crate::utils::time;

async fn load_active_recipient(
    service: &NotificationService,
    recipient_id: Uuid,
    cancel: &CancellationToken,
) -> Result<NotificationRecipient> {
    service
        .recipients
        .get_active_by_id(recipient_id, cancel)
        .await?
        .ok_or_else(|| PlatformError::not_found("Recipient not found"))
}

pub async fn mark_delivered(
    service: &NotificationService,
    recipient_id: Uuid,
    cancel: &CancellationToken,
) -> Result<bool> {
    let mut recipient = load_active_recipient(service, recipient_id, cancel).await?;
    if !recipient.mark_delivered(time::now()) {
        debug!("Recipient {} already delivered", recipient_id);
        return Ok(false);
    }

    let mut uow = UnitOfWork::begin(service.storage());
    service.recipients.stage_update(&mut uow, recipient);
    uow.commit(cancel).await?;

    info!("Recipient {} marked delivered", recipient_id);
    Ok(true)
}

pub async fn mark_read(
    service: &NotificationService,
    recipient_id: Uuid,
    cancel: &CancellationToken,
) -> Result<bool> {
    let mut recipient = load_active_recipient(service, recipient_id, cancel).await?;
    if !recipient.mark_read(time::now()) {
        debug!("Recipient {} already read", recipient_id);
        return Ok(false);
    }

    let mut uow = UnitOfWork::begin(service.storage());
    service.recipients.stage_update(&mut uow, recipient);
    uow.commit(cancel).await?;

    info!("Recipient {} marked read", recipient_id);
    Ok(true)
}

pub async fn count_unread(
    service: &NotificationService,
    user_id: Uuid,
    cancel: &CancellationToken,
) -> Result<u64> {
    service
        .recipients
        .count(
            service
                .recipients
                .query()
                .active()
                .filter(Field::UserId, user_id)
                .filter(Field::IsRead, false),
            cancel,
        )
        .await
}

pub async fn list_pending(
    service: &NotificationService,
    max_items: u64,
    cancel: &CancellationToken,
) -> Result<Vec<NotificationRecipient>> {
    if max_items == 0 {
        return Ok(Vec::new());
    }

    service
        .recipients
        .find(
            service
                .recipients
                .query()
                .active()
                .filter(Field::IsDelivered, false)
                .order_by(SortKey::CreatedAt, SortDirection::Asc)
                .limit(max_items),
            cancel,
        )
        .await
}

pub async fn recipients_for_user(
    service: &NotificationService,
    user_id: Uuid,
    only_unread: bool,
    cancel: &CancellationToken,
) -> Result<Vec<NotificationRecipient>> {
    let mut query = service
        .recipients
        .query()
        .active()
        .filter(Field::UserId, user_id);
    if only_unread {
        query = query.filter(Field::IsRead, false);
    }

    service
        .recipients
        .find(query.order_by(SortKey::CreatedAt, SortDirection::Desc), cancel)
        .await
}
