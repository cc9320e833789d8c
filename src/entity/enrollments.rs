//! 选课实体

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::models::enrollments::entities::{Enrollment, EnrollmentStatus};
use crate::utils::time::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub enrolled_at: i64,
    pub unenrolled_at: Option<i64>,
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
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
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
    pub fn into_enrollment(self) -> Enrollment {
        Enrollment {
            id: self.id,
            course_id: self.course_id,
            user_id: self.user_id,
            status: self
                .status
                .parse::<EnrollmentStatus>()
                .unwrap_or(EnrollmentStatus::Active),
            enrolled_at: from_millis(self.enrolled_at),
            unenrolled_at: self.unenrolled_at.map(from_millis),
            is_active: self.is_active,
            created_at: from_millis(self.created_at),
            updated_at: self.updated_at.map(from_millis),
        }
    }
}

// 业务模型转换为完整赋值的 ActiveModel（插入与整行更新共用）
impl From<Enrollment> for ActiveModel {
    fn from(value: Enrollment) -> Self {
        Self {
            id: Set(value.id),
            course_id: Set(value.course_id),
            user_id: Set(value.user_id),
            status: Set(value.status.to_string()),
            enrolled_at: Set(to_millis(value.enrolled_at)),
            unenrolled_at: Set(value.unenrolled_at.map(to_millis)),
            is_active: Set(value.is_active),
            created_at: Set(to_millis(value.created_at)),
            updated_at: Set(value.updated_at.map(to_millis)),
        }
    }
}
