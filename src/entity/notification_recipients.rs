//! 通知接收人实体

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::models::notifications::entities::{NotificationRecipient};
use crate::utils::time::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notification_recipients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub notification_id: Uuid,
    pub user_id: Uuid,
    pub is_delivered: bool,
    pub delivered_at: Option<i64>,
    pub is_read: bool,
    pub read_at: Option<i64>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::notifications::Entity",
        from = "Column::NotificationId",
        to = "super::notifications::Column::Id"
    )]
    Notification,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::notifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_notification_recipient(self) -> NotificationRecipient {
        NotificationRecipient {
            id: self.id,
            notification_id: self.notification_id,
            user_id: self.user_id,
            is_delivered: self.is_delivered,
            delivered_at: self.delivered_at.map(from_millis),
            is_read: self.is_read,
            read_at: self.read_at.map(from_millis),
            is_active: self.is_active,
            created_at: from_millis(self.created_at),
            updated_at: self.updated_at.map(from_millis),
        }
    }
}

// 业务模型转换为完整赋值的 ActiveModel（插入与整行更新共用）
impl From<NotificationRecipient> for ActiveModel {
    fn from(value: NotificationRecipient) -> Self {
        Self {
            id: Set(value.id),
            notification_id: Set(value.notification_id),
            user_id: Set(value.user_id),
            is_delivered: Set(value.is_delivered),
            delivered_at: Set(value.delivered_at.map(to_millis)),
            is_read: Set(value.is_read),
            read_at: Set(value.read_at.map(to_millis)),
            is_active: Set(value.is_active),
            created_at: Set(to_millis(value.created_at)),
            updated_at: Set(value.updated_at.map(to_millis)),
        }
    }
}
