use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// 未指定渠道时使用的默认渠道
pub const DEFAULT_CHANNEL: &str = "ui";

// 通知实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub payload: Option<String>,
    pub channel: String,
    pub sender_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
    pub context_type: Option<String>,
    pub context_id: Option<Uuid>,
    pub sent_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

crate::impl_lifecycle!(Notification, Notification);

// 通知接收人：投递与已读两个标志相互独立
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct NotificationRecipient {
    pub id: Uuid,
    pub notification_id: Uuid,
    pub user_id: Uuid,
    pub is_delivered: bool,
    pub delivered_at: Option<DateTime<Utc>>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

crate::impl_lifecycle!(NotificationRecipient, NotificationRecipient);

impl NotificationRecipient {
    /// 标记为已投递；已投递时返回 false 且不修改
    pub fn mark_delivered(&mut self, at: DateTime<Utc>) -> bool {
        if self.is_delivered {
            return false;
        }
        self.is_delivered = true;
        self.delivered_at = Some(at);
        self.updated_at = Some(at);
        true
    }

    /// 标记为已读；已读时返回 false 且不修改，不影响投递标志
    pub fn mark_read(&mut self, at: DateTime<Utc>) -> bool {
        if self.is_read {
            return false;
        }
        self.is_read = true;
        self.read_at = Some(at);
        self.updated_at = Some(at);
        true
    }
}

/// 通知及其接收人
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct NotificationDetail {
    pub notification: Notification,
    pub recipients: Vec<NotificationRecipient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient() -> NotificationRecipient {
        NotificationRecipient {
            id: Uuid::new_v4(),
            notification_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            is_delivered: false,
            delivered_at: None,
            is_read: false,
            read_at: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_read_does_not_imply_delivered() {
        let mut r = recipient();
        assert!(r.mark_read(Utc::now()));
        assert!(r.is_read);
        assert!(r.read_at.is_some());
        assert!(!r.is_delivered);
        assert!(r.delivered_at.is_none());
    }

    #[test]
    fn test_mark_delivered_is_idempotent() {
        let mut r = recipient();
        let first = Utc::now();
        assert!(r.mark_delivered(first));
        assert!(!r.mark_delivered(first + chrono::Duration::seconds(5)));
        assert_eq!(r.delivered_at, Some(first));
    }
}
