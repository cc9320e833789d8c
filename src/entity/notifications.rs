//! 通知实体

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::models::notifications::entities::{Notification};
use crate::utils::time::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub payload: Option<String>,
    pub channel: String,
    pub sender_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
    pub context_type: Option<String>,
    pub context_id: Option<Uuid>,
    pub sent_at: Option<i64>,
    pub expires_at: Option<i64>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SenderId",
        to = "super::users::Column::Id"
    )]
    Sender,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sender.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_notification(self) -> Notification {
        Notification {
            id: self.id,
            title: self.title,
            message: self.message,
            payload: self.payload,
            channel: self.channel,
            sender_id: self.sender_id,
            course_id: self.course_id,
            context_type: self.context_type,
            context_id: self.context_id,
            sent_at: self.sent_at.map(from_millis),
            expires_at: self.expires_at.map(from_millis),
            is_active: self.is_active,
            created_at: from_millis(self.created_at),
            updated_at: self.updated_at.map(from_millis),
        }
    }
}

// 业务模型转换为完整赋值的 ActiveModel（插入与整行更新共用）
impl From<Notification> for ActiveModel {
    fn from(value: Notification) -> Self {
        Self {
            id: Set(value.id),
            title: Set(value.title),
            message: Set(value.message),
            payload: Set(value.payload),
            channel: Set(value.channel),
            sender_id: Set(value.sender_id),
            course_id: Set(value.course_id),
            context_type: Set(value.context_type),
            context_id: Set(value.context_id),
            sent_at: Set(value.sent_at.map(to_millis)),
            expires_at: Set(value.expires_at.map(to_millis)),
            is_active: Set(value.is_active),
            created_at: Set(to_millis(value.created_at)),
            updated_at: Set(value.updated_at.map(to_millis)),
        }
    }
}
