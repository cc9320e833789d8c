//! 测评实体

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::models::evaluations::entities::{Evaluation};
use crate::utils::time::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub total_points: f64,
    pub open_at: Option<i64>,
    pub close_at: Option<i64>,
    pub time_limit_minutes: Option<i32>,
    pub is_published: bool,
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
    pub fn into_evaluation(self) -> Evaluation {
        Evaluation {
            id: self.id,
            course_id: self.course_id,
            title: self.title,
            description: self.description,
            total_points: self.total_points,
            open_at: self.open_at.map(from_millis),
            close_at: self.close_at.map(from_millis),
            time_limit_minutes: self.time_limit_minutes,
            is_published: self.is_published,
            is_active: self.is_active,
            created_at: from_millis(self.created_at),
            updated_at: self.updated_at.map(from_millis),
        }
    }
}

// 业务模型转换为完整赋值的 ActiveModel（插入与整行更新共用）
impl From<Evaluation> for ActiveModel {
    fn from(value: Evaluation) -> Self {
        Self {
            id: Set(value.id),
            course_id: Set(value.course_id),
            title: Set(value.title),
            description: Set(value.description),
            total_points: Set(value.total_points),
            open_at: Set(value.open_at.map(to_millis)),
            close_at: Set(value.close_at.map(to_millis)),
            time_limit_minutes: Set(value.time_limit_minutes),
            is_published: Set(value.is_published),
            is_active: Set(value.is_active),
            created_at: Set(to_millis(value.created_at)),
            updated_at: Set(value.updated_at.map(to_millis)),
        }
    }
}
