use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;
use uuid::Uuid;

// 通知创建请求
//
// target_all 为真时发送给所有激活用户；否则发送给 recipient_ids 中的激活用户，
// 无效或停用的 id 会被静默忽略。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct CreateNotificationRequest {
    pub title: String,
    pub message: String,
    pub payload: Option<String>,
    pub channel: Option<String>,
    pub sender_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
    pub context_type: Option<String>,
    pub context_id: Option<Uuid>,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub target_all: bool,
    #[serde(default)]
    pub recipient_ids: Option<Vec<Uuid>>,
}

// 接收人查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct RecipientListParams {
    #[serde(default)]
    pub only_unread: bool,
}

// 待投递查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct PendingListParams {
    pub max_items: Option<u64>,
}
