//! 课程模块实体

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::models::course_modules::entities::{CourseModule};
use crate::utils::time::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course_modules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub order_index: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_course_module(self) -> CourseModule {
        CourseModule {
            id: self.id,
            course_id: self.course_id,
            title: self.title,
            order_index: self.order_index,
            description: self.description,
            is_active: self.is_active,
            created_at: from_millis(self.created_at),
            updated_at: self.updated_at.map(from_millis),
        }
    }
}

// 业务模型转换为完整赋值的 ActiveModel（插入与整行更新共用）
impl From<CourseModule> for ActiveModel {
    fn from(value: CourseModule) -> Self {
        Self {
            id: Set(value.id),
            course_id: Set(value.course_id),
            title: Set(value.title),
            order_index: Set(value.order_index),
            description: Set(value.description),
            is_active: Set(value.is_active),
            created_at: Set(to_millis(value.created_at)),
            updated_at: Set(value.updated_at.map(to_millis)),
        }
    }
}
