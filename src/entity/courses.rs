//! 课程实体

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::models::courses::entities::{Course};
use crate::utils::time::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub code: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_published: bool,
    pub instructor_id: Uuid,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::InstructorId",
        to = "super::users::Column::Id"
    )]
    Instructor,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_course(self) -> Course {
        Course {
            id: self.id,
            title: self.title,
            code: self.code,
            description: self.description,
            is_published: self.is_published,
            instructor_id: self.instructor_id,
            is_active: self.is_active,
            created_at: from_millis(self.created_at),
            updated_at: self.updated_at.map(from_millis),
        }
    }
}

// 业务模型转换为完整赋值的 ActiveModel（插入与整行更新共用）
impl From<Course> for ActiveModel {
    fn from(value: Course) -> Self {
        Self {
            id: Set(value.id),
            title: Set(value.title),
            code: Set(value.code),
            description: Set(value.description),
            is_published: Set(value.is_published),
            instructor_id: Set(value.instructor_id),
            is_active: Set(value.is_active),
            created_at: Set(to_millis(value.created_at)),
            updated_at: Set(value.updated_at.map(to_millis)),
        }
    }
}
