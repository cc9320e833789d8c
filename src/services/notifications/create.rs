use std::collections::{HashMap, HashSet};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use super::NotificationService;
use crate::errors::Result;
use crate::models::notifications::{
    entities::{DEFAULT_CHANNEL, Notification, NotificationDetail, NotificationRecipient},
    requests::CreateNotificationRequest,
};
use crate::models::users::entities::User;
use crate::storage::UnitOfWork;
use crate::utils::time;
use crate::utils::validate::require_text;

pub async fn create_notification(
    service: &NotificationService,
    request: CreateNotificationRequest,
    cancel: &CancellationToken,
) -> Result<NotificationDetail> {
    require_text(&request.title, "Title")?;
    require_text(&request.message, "Message")?;

    let now = time::now();
    let channel = request
        .channel
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CHANNEL)
        .to_string();

    let notification = Notification {
        id: Uuid::new_v4(),
        title: request.title.trim().to_string(),
        message: request.message,
        payload: request.payload,
        channel,
        sender_id: request.sender_id,
        course_id: request.course_id,
        context_type: request.context_type,
        context_id: request.context_id,
        sent_at: Some(now),
        expires_at: request.expires_at.map(time::truncate),
        is_active: true,
        created_at: now,
        updated_at: None,
    };

    let targets = resolve_recipients(service, request.target_all, request.recipient_ids, cancel)
        .await?;

    let recipients: Vec<NotificationRecipient> = targets
        .into_iter()
        .map(|user| NotificationRecipient {
            id: Uuid::new_v4(),
            notification_id: notification.id,
            user_id: user.id,
            is_delivered: false,
            delivered_at: None,
            is_read: false,
            read_at: None,
            is_active: true,
            created_at: now,
            updated_at: None,
        })
        .collect();

    let mut uow = UnitOfWork::begin(service.storage());
    service.notifications.stage(&mut uow, notification.clone());
    for recipient in &recipients {
        service.recipients.stage(&mut uow, recipient.clone());
    }
    uow.commit(cancel).await?;

    info!(
        "Notification {} created on channel '{}' with {} recipient(s)",
        notification.id,
        notification.channel,
        recipients.len()
    );
    Ok(NotificationDetail {
        notification,
        recipients,
    })
}

/// 解析接收人
///
/// target_all 时取全部激活用户；否则按给定 id 去重（保留首次出现顺序）并与激活用户求交集，
/// 不存在或已停用的 id 被静默丢弃。
async fn resolve_recipients(
    service: &NotificationService,
    target_all: bool,
    recipient_ids: Option<Vec<Uuid>>,
    cancel: &CancellationToken,
) -> Result<Vec<User>> {
    if target_all {
        return service.users.list_active(cancel).await;
    }

    let Some(requested) = recipient_ids.filter(|ids| !ids.is_empty()) else {
        return Ok(Vec::new());
    };

    let mut seen = HashSet::new();
    let ordered: Vec<Uuid> = requested.into_iter().filter(|id| seen.insert(*id)).collect();

    let mut active: HashMap<Uuid, User> = service
        .users
        .find(service.users.query().by_ids(ordered.clone()).active(), cancel)
        .await?
        .into_iter()
        .map(|user| (user.id, user))
        .collect();

    let resolved: Vec<User> = ordered.iter().filter_map(|id| active.remove(id)).collect();
    if resolved.len() < ordered.len() {
        debug!(
            "Dropped {} unknown or inactive recipient id(s)",
            ordered.len() - resolved.len()
        );
    }
    Ok(resolved)
}
